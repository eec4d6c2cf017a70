use crate::error::LabelFormatError;

/// An element label split into its actor and the remaining predicate or
/// task name.
///
/// Labels follow the convention `"<actor> <phrase...>"`, for example
/// `"AIsystem generatesSyntheticContent?"` on a gateway or
/// `"AIprovider hasMarkingObligation"` on a task. The actor is the first
/// whitespace-separated token; everything after it is joined into a single
/// symbol-friendly token with internal whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phrase {
    pub actor: String,
    pub text: String,
}

impl Phrase {
    /// Splits a raw diagram label into an `(actor, text)` pair.
    ///
    /// A single trailing question mark is stripped, so gateway labels keep
    /// their natural phrasing. Labels that do not yield both parts are
    /// rejected rather than patched up with a placeholder actor.
    pub fn split(element_id: &str, raw: &str) -> Result<Self, LabelFormatError> {
        let cleaned = raw.trim();
        let cleaned = cleaned.strip_suffix('?').unwrap_or(cleaned);
        let mut tokens = cleaned.split_whitespace();

        let actor = match tokens.next() {
            Some(actor) => actor.to_string(),
            None => {
                return Err(LabelFormatError::Missing {
                    element_id: element_id.to_string(),
                });
            }
        };
        let text: String = tokens.collect();
        if text.is_empty() {
            return Err(LabelFormatError::Unsplittable {
                element_id: element_id.to_string(),
                label: raw.to_string(),
            });
        }

        Ok(Self { actor, text })
    }
}
