/// Textual markers wrapped around each prototype in a definitions file and
/// the text that replaces them in the generated stub header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub begin : String,
    pub end : String,
    pub prefix : String,
    pub second : String,
    pub export_prefix : String,
    pub calling_convention : String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            begin : "BEGIN ".to_string(),
            end : "END".to_string(),
            prefix : "PREFIX".to_string(),
            second : "SECOND".to_string(),
            export_prefix : "exp".to_string(),
            calling_convention : "STDCALL".to_string(),
        }
    }
}

impl Markers {
    pub fn with_export_prefix(export_prefix : &str) -> Self {
        Self { export_prefix : export_prefix.to_string(), ..Default::default() }
    }

    /// Rewrite every marker occurrence in `line`, in a fixed order:
    /// begin and end are dropped, prefix and second are replaced.
    pub fn substitute(&self, line : &str) -> String {
        line.replace(&self.begin, "")
            .replace(&self.end, "")
            .replace(&self.prefix, &self.export_prefix)
            .replace(&self.second, &self.calling_convention)
    }
}
