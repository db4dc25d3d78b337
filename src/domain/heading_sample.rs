#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// Referenced to true north by the platform.
    Absolute,
    /// Rotation around the vertical axis without an external reference.
    Relative,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeadingSample {
    pub heading_deg: f64,
    pub accuracy_label: Option<String>,
    pub source: SourceKind,
}
