use std::fmt;

// === SessionError ===

/// Errors raised while reading or rewriting a session store document.
#[derive(Debug, PartialEq)]
pub enum SessionError {
    /// JSON (outer or string-encoded) does not parse, or a field has the wrong shape.
    MalformedInput(String),
    /// A required field is absent.
    MissingField(String),
    /// The requested window does not exist.
    IndexOutOfRange { index: usize, count: usize },
    /// The session file could not be read.
    Io(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::MalformedInput(msg) => write!(f, "Malformed session input: {}", msg),
            SessionError::MissingField(field) => {
                write!(f, "Missing session field: {}", field)
            }
            SessionError::IndexOutOfRange { index, count } => write!(
                f,
                "Window index {} out of range (session has {} windows)",
                index, count
            ),
            SessionError::Io(msg) => write!(f, "Session I/O error: {}", msg),
        }
    }
}

impl std::error::Error for SessionError {}

// === LayoutError ===

/// Errors raised by the grid packer.
#[derive(Debug, PartialEq)]
pub enum LayoutError {
    /// Not even one group box fits across the viewport.
    NoColumns {
        viewport_width: f64,
        box_width: u32,
        h_spacing: u32,
    },
    /// The groups need more rows than the viewport is tall.
    Overflow {
        groups: usize,
        box_width: u32,
        box_height: u32,
        v_spacing: u32,
        h_spacing: u32,
        columns: u32,
        height_needed: u64,
        viewport_width: f64,
        viewport_height: f64,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::NoColumns {
                viewport_width,
                box_width,
                h_spacing,
            } => write!(
                f,
                "No group column fits: group width {} plus hspace {} exceeds UI width {}",
                box_width, h_spacing, viewport_width
            ),
            LayoutError::Overflow {
                groups,
                box_width,
                box_height,
                v_spacing,
                h_spacing,
                columns,
                height_needed,
                viewport_width,
                viewport_height,
            } => write!(
                f,
                "Cannot fit {} groups (width {}, height {}, vspace {}, hspace {}) in the UI \
                 (width {}, height {}): {} columns need {} px of height",
                groups,
                box_width,
                box_height,
                v_spacing,
                h_spacing,
                viewport_width,
                viewport_height,
                columns,
                height_needed
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

// === SettingsError ===

/// Errors related to loading and saving grid settings.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === ConvertError ===

/// Top-level error for one conversion run.
///
/// Wrapping variants display a short context line; the wrapped error is
/// reachable through `source()`.
#[derive(Debug)]
pub enum ConvertError {
    Session(SessionError),
    Layout(LayoutError),
    Settings(SettingsError),
    /// Packing placed a different number of groups than were extracted.
    Consistency { before: usize, after: usize },
    /// The input session file does not exist.
    InputMissing(String),
    /// The action needs an output path and none was given.
    MissingOutput,
    /// The output path is the input path.
    SameAsInput(String),
    /// The output path already exists.
    OutputExists(String),
    /// Writing output failed.
    Io(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Session(_) => write!(f, "Could not use the session document"),
            ConvertError::Layout(_) => write!(f, "Could not lay out the tab groups"),
            ConvertError::Settings(_) => write!(f, "Could not load grid settings"),
            ConvertError::Consistency { before, after } => write!(
                f,
                "There were {} groups before and {} groups after the tidying operation, aborting",
                before, after
            ),
            ConvertError::InputMissing(path) => {
                write!(f, "Session file '{}' does not exist", path)
            }
            ConvertError::MissingOutput => write!(f, "An output file is required"),
            ConvertError::SameAsInput(path) => {
                write!(f, "Output file cannot be the same as the input file: {}", path)
            }
            ConvertError::OutputExists(path) => {
                write!(f, "Output file already exists: {}", path)
            }
            ConvertError::Io(msg) => write!(f, "Output I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Session(e) => Some(e),
            ConvertError::Layout(e) => Some(e),
            ConvertError::Settings(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SessionError> for ConvertError {
    fn from(e: SessionError) -> Self {
        ConvertError::Session(e)
    }
}

impl From<LayoutError> for ConvertError {
    fn from(e: LayoutError) -> Self {
        ConvertError::Layout(e)
    }
}

impl From<SettingsError> for ConvertError {
    fn from(e: SettingsError) -> Self {
        ConvertError::Settings(e)
    }
}
