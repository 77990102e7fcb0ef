//! Narrative prompts.

use std::path::Path;

use crate::error::{WorkerError, WorkerResult};

/// The default narrative: one pediatric CPR sequence, in order.
pub const DEFAULT_PROMPTS: [&str; 10] = [
    "[trigger] Safe outdoor park setting with open space and good lighting",
    "[trigger] Young child lying unresponsive on the ground, approximately 6-8 years old",
    "[trigger] Responder kneeling beside child, checking for responsiveness by tapping shoulders",
    "[trigger] Responder tilting child's head back slightly to open airway and checking for breathing",
    "[trigger] Responder calling for help while maintaining position next to child",
    "[trigger] Responder positioning hands on center of child's chest for compressions",
    "[trigger] Responder performing chest compressions with proper hand placement and depth",
    "[trigger] Responder giving rescue breaths after compression cycle, pinching nose and sealing mouth",
    "[trigger] Responder continuing compression cycles with visible rhythmic motion",
    "[trigger] Responder maintaining CPR while emergency services arrive in background",
];

/// Read one prompt per non-empty line.
pub async fn load_prompts(path: &Path) -> WorkerResult<Vec<String>> {
    let text = tokio::fs::read_to_string(path).await?;
    let prompts = parse_prompts(&text);
    if prompts.is_empty() {
        return Err(WorkerError::invalid_prompts(format!(
            "{} contains no prompts",
            path.display()
        )));
    }
    Ok(prompts)
}

fn parse_prompts(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prompts_skips_blank_lines() {
        let text = "first\n\n  second  \r\n\t\nthird";
        assert_eq!(parse_prompts(text), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_default_narrative() {
        assert!(DEFAULT_PROMPTS.iter().all(|p| p.starts_with("[trigger] ")));
        assert!(DEFAULT_PROMPTS[9].contains("emergency services arrive"));
    }

    #[tokio::test]
    async fn test_load_prompts_rejects_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("medical_prompts.txt");
        tokio::fs::write(&path, "\n \n").await.unwrap();

        assert!(matches!(
            load_prompts(&path).await,
            Err(WorkerError::InvalidPrompts(_))
        ));
    }
}
