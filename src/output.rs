use eyre::Result;

use crate::pipeline::SummaryReport;

/// Render a report as readable text: summary first, then the transcript
pub fn render_text(report: &SummaryReport) -> String {
    let mut out = String::new();

    if !report.title.is_empty() {
        out.push_str(&report.title);
        out.push('\n');
    }
    out.push_str(&report.thumbnail_url);
    out.push_str("\n\n--- Summary ---\n");
    out.push_str(&report.summary);
    out.push_str("\n\n--- Transcript ---\n");
    out.push_str(&report.transcript);
    out.push('\n');

    out
}

pub fn render_json(report: &SummaryReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> SummaryReport {
        SummaryReport {
            video_id: "dQw4w9WgXcQ".to_string(),
            title: "Test Video".to_string(),
            language: "en".to_string(),
            thumbnail_url: "https://img.youtube.com/vi/dQw4w9WgXcQ/0.jpg".to_string(),
            transcript: "Hello world".to_string(),
            summary: "- greets the world".to_string(),
        }
    }

    #[test]
    fn test_render_text() {
        let out = render_text(&sample_report());
        assert!(out.starts_with("Test Video\n"));
        assert!(out.contains("--- Summary ---\n- greets the world"));
        assert!(out.contains("--- Transcript ---\nHello world"));
        assert!(out.contains("https://img.youtube.com/vi/dQw4w9WgXcQ/0.jpg"));
    }

    #[test]
    fn test_render_text_without_title() {
        let mut report = sample_report();
        report.title.clear();
        let out = render_text(&report);
        assert!(out.starts_with("https://img.youtube.com/vi/"));
    }

    #[test]
    fn test_render_json() {
        let out = render_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["video_id"], "dQw4w9WgXcQ");
        assert_eq!(value["summary"], "- greets the world");
        assert_eq!(value["transcript"], "Hello world");
    }
}
