use crate::error::WireError;
use crate::types::LanguageOption;

/// Version-1 separator between `id|displayName` pairs.
pub const V1_PAIR_SEPARATOR: char = ';';
/// Version-1 separator between the id and the display name of one pair.
pub const V1_FIELD_SEPARATOR: char = '|';

/// Encoding of the supported-languages payload exchanged with the native
/// side.
///
/// Version 1 is a flat list of `id|displayName` pairs joined by `;`, e.g.
/// `"en-US|English;fr-FR|French"`. There is no escaping: an encoded value
/// may not contain either separator. Parsing skips empty segments, so a
/// trailing pair separator is harmless and the empty payload decodes to an
/// empty list. The display name may be empty (some engines omit it); the id
/// may not.
///
/// The exact delimiters are a platform convention rather than something this
/// layer owns, so they are configurable through the `[wire]` config section;
/// [`WireFormat::v1`] is the default used everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireFormat {
    pair_separator: char,
    field_separator: char,
}

impl Default for WireFormat {
    fn default() -> Self {
        Self::v1()
    }
}

impl WireFormat {
    /// The version-1 format: `;` between pairs, `|` between fields.
    pub fn v1() -> Self {
        Self {
            pair_separator: V1_PAIR_SEPARATOR,
            field_separator: V1_FIELD_SEPARATOR,
        }
    }

    pub fn new(pair_separator: char, field_separator: char) -> Result<Self, WireError> {
        if pair_separator == field_separator {
            return Err(WireError::SeparatorConflict(pair_separator));
        }
        Ok(Self {
            pair_separator,
            field_separator,
        })
    }

    pub fn pair_separator(&self) -> char {
        self.pair_separator
    }

    pub fn field_separator(&self) -> char {
        self.field_separator
    }

    /// Decode a serialized payload into language options, preserving order.
    pub fn parse(&self, payload: &str) -> Result<Vec<LanguageOption>, WireError> {
        let mut options = Vec::new();
        for segment in payload.split(self.pair_separator) {
            if segment.is_empty() {
                continue;
            }
            let (id, display_name) = segment
                .split_once(self.field_separator)
                .ok_or_else(|| WireError::MalformedPair(segment.to_string()))?;
            if id.is_empty() {
                return Err(WireError::EmptyLanguageId(segment.to_string()));
            }
            options.push(LanguageOption::new(id, display_name));
        }
        Ok(options)
    }

    /// Encode language options into a payload that [`parse`](Self::parse)
    /// round-trips. Values containing a separator are rejected instead of
    /// silently corrupting the payload.
    pub fn encode<'a, I>(&self, options: I) -> Result<String, WireError>
    where
        I: IntoIterator<Item = &'a LanguageOption>,
    {
        let mut pairs = Vec::new();
        for option in options {
            if option.id.is_empty() {
                return Err(WireError::EmptyLanguageId(option.display_name.clone()));
            }
            for field in [option.id.as_str(), option.display_name.as_str()] {
                if field.contains(self.pair_separator) || field.contains(self.field_separator) {
                    return Err(WireError::ReservedSeparator(field.to_string()));
                }
            }
            pairs.push(format!(
                "{}{}{}",
                option.id, self.field_separator, option.display_name
            ));
        }
        Ok(pairs.join(&self.pair_separator.to_string()))
    }
}
