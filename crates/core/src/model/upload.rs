use std::fmt;

/// The three optional upload slots, in the order the backend expects them
/// to be submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UploadKind {
    Pyq,
    Syllabus,
    Notes,
}

impl UploadKind {
    /// Canonical submission order: pyq, syllabus, notes.
    pub const ALL: [UploadKind; 3] = [UploadKind::Pyq, UploadKind::Syllabus, UploadKind::Notes];

    /// Wire name used as the multipart `file_type` field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            UploadKind::Pyq => "pyq",
            UploadKind::Syllabus => "syllabus",
            UploadKind::Notes => "notes",
        }
    }

    /// Human label for the slot's file picker.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            UploadKind::Pyq => "Previous Year Questions",
            UploadKind::Syllabus => "Syllabus",
            UploadKind::Notes => "Notes",
        }
    }
}

impl fmt::Display for UploadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
