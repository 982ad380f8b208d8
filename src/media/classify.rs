//! Extension-based media classification and filename conventions.
//!
//! Classification is a fixed, case-insensitive extension table — a pure,
//! total function that never fails. Anything outside the table is
//! [`MediaKind::Unknown`].
//!
//! Participant attribution is a filename heuristic: exports name media files
//! `<prefix> - <participant>.<ext>`. It is deliberately isolated here so the
//! convention can be swapped without touching aggregation, and its failure
//! mode (separator absent) is a documented default, not an error.

use super::models::MediaKind;

/// Sentinel participant for files whose name carries no ` - ` separator.
pub const UNKNOWN_PARTICIPANT: &str = "Unknown";

/// The separator between the file prefix and the participant name.
const PARTICIPANT_SEPARATOR: &str = " - ";

impl MediaKind {
    /// Classifies a file extension.
    ///
    /// Case-insensitive; total. Extensions outside the fixed tables map to
    /// [`MediaKind::Unknown`].
    ///
    /// # Example
    ///
    /// ```
    /// use chatstats::media::MediaKind;
    ///
    /// assert_eq!(MediaKind::detect("JPG"), MediaKind::Image);
    /// assert_eq!(MediaKind::detect("gif"), MediaKind::Gif);
    /// assert_eq!(MediaKind::detect("mp4"), MediaKind::Video);
    /// assert_eq!(MediaKind::detect("pdf"), MediaKind::Unknown);
    /// ```
    pub fn detect(extension: &str) -> Self {
        match extension.to_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "heic" | "webp" => MediaKind::Image,
            "gif" => MediaKind::Gif,
            "mp4" | "mov" | "avi" | "mkv" | "webm" => MediaKind::Video,
            _ => MediaKind::Unknown,
        }
    }
}

/// Returns the lowercase extension of a file name, or `""` if it has none.
///
/// A leading dot (hidden files like `.hidden`) does not count as an
/// extension separator.
pub fn extension_of(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => file_name[idx + 1..].to_lowercase(),
        _ => String::new(),
    }
}

/// Derives the participant from a media file name.
///
/// Convention: the substring after the *last* ` - ` in the name, with the
/// trailing extension stripped. When the separator is absent (or nothing
/// remains after it), the fixed [`UNKNOWN_PARTICIPANT`] sentinel is
/// returned. This is derived attribution, not authoritative identity.
///
/// # Example
///
/// ```
/// use chatstats::media::participant_from_filename;
///
/// assert_eq!(participant_from_filename("2024-01-01 - Alice.jpg"), "Alice");
/// assert_eq!(participant_from_filename("IMG_0001.jpg"), "Unknown");
/// ```
pub fn participant_from_filename(file_name: &str) -> String {
    let Some(idx) = file_name.rfind(PARTICIPANT_SEPARATOR) else {
        return UNKNOWN_PARTICIPANT.to_string();
    };

    let tail = &file_name[idx + PARTICIPANT_SEPARATOR.len()..];
    let without_ext = match tail.rfind('.') {
        Some(dot) => &tail[..dot],
        None => tail,
    };

    let participant = without_ext.trim();
    if participant.is_empty() {
        UNKNOWN_PARTICIPANT.to_string()
    } else {
        participant.to_string()
    }
}
