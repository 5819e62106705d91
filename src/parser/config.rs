/// Configuration for the structural parser.
///
/// The defaults reproduce the observed behavior of the museum-guide backend's
/// reply shapes; the knobs exist so the heuristics can be swapped out in
/// isolation without touching the scan loop.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Heading used when no line is extractable from the input.
    pub default_heading: String,
    /// Section title that switches colon-items into tour-times mode.
    pub tours_section: String,
    /// Leading words that let a colon line outside the tours section become
    /// a titled item instead of plain text.
    pub descriptive_leads: Vec<String>,
    /// Placeholder detail for a colon-item whose description is empty.
    pub missing_description: String,
    /// Whether to drop an echoed prompt prefix from the first line.
    pub strip_echoed_prompt: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_heading: "Response".to_string(),
            tours_section: "Guided Tours".to_string(),
            descriptive_leads: ["The", "Ancient", "Greek", "Rare", "Interactive"]
                .into_iter()
                .map(String::from)
                .collect(),
            missing_description: "No description available.".to_string(),
            strip_echoed_prompt: true,
        }
    }
}
