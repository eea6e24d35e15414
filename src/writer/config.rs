use crate::{
    ArgumentError,
    file::{MAX_TEXT_LEN, Timing},
};

/// What to do with a track name or copyright notice longer than 255 bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextOverflow {
    /// Fail with [`ArgumentError::TextTooLong`]
    #[default]
    Reject,
    /// Keep the first 255 bytes, backing off to a character boundary
    Truncate,
}

impl TextOverflow {
    /// The text as it will be written.
    pub fn apply<'t>(&self, text: &'t str) -> Result<&'t str, ArgumentError> {
        if text.len() <= MAX_TEXT_LEN {
            return Ok(text);
        }
        match self {
            Self::Reject => Err(ArgumentError::TextTooLong { len: text.len() }),
            Self::Truncate => {
                let mut end = MAX_TEXT_LEN;
                while !text.is_char_boundary(end) {
                    end -= 1;
                }
                Ok(&text[..end])
            }
        }
    }
}

/// How running status is applied to channel voice events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunningStatus {
    /// Omit a status equal to the last one written. Meta events in between
    /// don't interrupt it.
    #[default]
    AcrossMeta,
    /// Like [`RunningStatus::AcrossMeta`], but any meta event forces the next
    /// status to be written.
    ResetOnMeta,
    /// Write every status byte
    Disabled,
}

#[doc = r#"
Settings for a [`TrackWriter`](crate::writer::TrackWriter).

```rust
# use smf_track_writer::prelude::*;
let config = WriterConfig::new(Timing::new_ticks_per_quarter_note(480).unwrap())
    .with_text_overflow(TextOverflow::Truncate)
    .with_running_status(RunningStatus::ResetOnMeta);
assert_eq!(config.timing.ticks_per_quarter_note(), 480);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WriterConfig {
    /// Time division written to the header. Defaults to 96 ticks per quarter note.
    pub timing: Timing,
    /// Oversized text handling
    pub text_overflow: TextOverflow,
    /// Running status handling
    pub running_status: RunningStatus,
}

impl WriterConfig {
    /// Defaults, with the given timing
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            ..Default::default()
        }
    }

    /// Set the time division
    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Set how oversized texts are handled
    pub fn with_text_overflow(mut self, text_overflow: TextOverflow) -> Self {
        self.text_overflow = text_overflow;
        self
    }

    /// Set how running status is applied
    pub fn with_running_status(mut self, running_status: RunningStatus) -> Self {
        self.running_status = running_status;
        self
    }
}

#[test]
fn oversized_text_is_rejected_by_default() {
    use pretty_assertions::assert_eq;

    let text = "a".repeat(256);
    assert_eq!(
        TextOverflow::default().apply(&text),
        Err(ArgumentError::TextTooLong { len: 256 })
    );
    assert_eq!(TextOverflow::Reject.apply(&text[..255]), Ok(&text[..255]));
}

#[test]
fn truncation_respects_char_boundaries() {
    use pretty_assertions::assert_eq;

    // 254 ascii bytes then a two-byte character straddling the limit
    let text = format!("{}é", "a".repeat(254));
    assert_eq!(text.len(), 256);
    assert_eq!(TextOverflow::Truncate.apply(&text).unwrap().len(), 254);

    let text = "b".repeat(300);
    assert_eq!(TextOverflow::Truncate.apply(&text).unwrap().len(), 255);
}
