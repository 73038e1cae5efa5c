use async_trait::async_trait;
use recital::{
    FlowPipeline, FlowRecording, GenerateRequest, GenerateResponse, PipelineConfig, RecitalResult,
    Role, SummaryDocument, TextGenerator,
};

/// Mock backend that answers all three pipeline operations well enough for
/// an end-to-end run: one canned sentence per step, an echoed refinement
/// list, and a faithful two-section document.
struct MockGenerator;

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, req: &GenerateRequest) -> RecitalResult<GenerateResponse> {
        let system = req
            .messages
            .iter()
            .find(|m| matches!(m.role, Role::System))
            .map(|m| m.content.as_str())
            .unwrap_or_default();
        let user = req
            .messages
            .iter()
            .rev()
            .find(|m| matches!(m.role, Role::User))
            .map(|m| m.content.as_str())
            .unwrap_or_default();

        let text = if system.contains("one step of a recorded product walkthrough") {
            "Performed a recorded step".to_string()
        } else if system.contains("numbered list of sentences") {
            user.to_string()
        } else {
            let bullets: String = user
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| format!("{line}\n"))
                .collect();
            format!("## User Interactions\n{bullets}\n## Summary\nThe user walked through the product.\n")
        };
        Ok(GenerateResponse::new(text))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model-v1"
    }
}

#[tokio::test]
async fn report_flows_from_file_to_markdown() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let flow_path = dir.path().join("flow.json");
    std::fs::write(
        &flow_path,
        r#"{
            "capturedEvents": [{"type": "click", "clickId": "s2"}],
            "steps": [
                {"type": "CHAPTER", "id": "s1", "title": "Welcome", "subtitle": ""},
                {"type": "IMAGE", "id": "s2", "url": "a.png",
                 "hotspots": [{"label": "Opened menu"}]},
                {"type": "CHAPTER", "id": "s3", "title": "Done", "subtitle": ""}
            ]
        }"#,
    )
    .expect("Failed to write flow file");

    let recording = FlowRecording::from_file(&flow_path).expect("Failed to load recording");
    let pipeline = FlowPipeline::new(MockGenerator, PipelineConfig::default());
    let document = pipeline.run(&recording).await.expect("Pipeline failed");

    assert_eq!(document.interactions().len(), 2);

    let output_path = dir.path().join("out/summary.md");
    std::fs::create_dir_all(output_path.parent().unwrap()).expect("Failed to create output dir");
    std::fs::write(&output_path, document.to_markdown()).expect("Failed to write report");

    let written = std::fs::read_to_string(&output_path).expect("Failed to read report");
    let parsed = SummaryDocument::parse(&written).expect("Report did not round-trip");
    assert_eq!(parsed.interactions(), document.interactions());
    assert_eq!(parsed.summary(), "The user walked through the product.");
}

#[test]
fn missing_flow_file_is_an_error() {
    let err = FlowRecording::from_file("definitely/not/here.json").unwrap_err();
    assert!(format!("{err}").contains("Failed to read flow file"));
}
