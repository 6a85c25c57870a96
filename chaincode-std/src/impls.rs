use crate::{constants::*, types::*};

impl Response {
    /// A successful response carrying `payload`.
    pub fn success(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            status:  OK,
            message: String::new(),
            payload: payload.into(),
        }
    }

    /// A failed response with the given message and an empty payload.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status:  ERROR,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    /// Whether the status is below [`ERRORTHRESHOLD`].
    pub fn is_ok(&self) -> bool { self.status < ERRORTHRESHOLD }

    pub fn is_error(&self) -> bool { !self.is_ok() }
}

fn validate_key_component(component: &str) -> Result<(), StateError> {
    if component.contains(MIN_UNICODE_RUNE) || component.contains(MAX_UNICODE_RUNE) {
        return Err(StateError::InvalidKeyComponent(component.to_string()));
    }
    Ok(())
}

/// Combine an object type and a list of attributes into a single ledger key.
///
/// The key has the form `U+0000 object_type U+0000 (attribute U+0000)*`, so
/// that all keys of an object type sharing a prefix of attributes form a
/// contiguous range of the ledger, see
/// [`get_state_by_partial_composite_key`](crate::HasState::get_state_by_partial_composite_key).
pub fn create_composite_key(object_type: &str, attributes: &[&str]) -> Result<String, StateError> {
    validate_key_component(object_type)?;
    let mut key = String::with_capacity(
        2 + object_type.len() + attributes.iter().map(|a| a.len() + 1).sum::<usize>(),
    );
    key.push(MIN_UNICODE_RUNE);
    key.push_str(object_type);
    key.push(MIN_UNICODE_RUNE);
    for attribute in attributes {
        validate_key_component(attribute)?;
        key.push_str(attribute);
        key.push(MIN_UNICODE_RUNE);
    }
    Ok(key)
}

/// Inverse of [`create_composite_key`]. Returns the object type and the
/// attributes.
pub fn split_composite_key(key: &str) -> Result<(String, Vec<String>), StateError> {
    let body = key
        .strip_prefix(MIN_UNICODE_RUNE)
        .and_then(|rest| rest.strip_suffix(MIN_UNICODE_RUNE))
        .ok_or_else(|| StateError::NotCompositeKey(key.to_string()))?;
    let mut components = body.split(MIN_UNICODE_RUNE).map(str::to_string);
    // `split` always yields at least one item.
    let object_type = components.next().unwrap_or_default();
    Ok((object_type, components.collect()))
}

/// The exclusive upper bound of all keys starting with `prefix`.
pub(crate) fn prefix_range_end(prefix: &str) -> String {
    let mut end = String::with_capacity(prefix.len() + MAX_UNICODE_RUNE.len_utf8());
    end.push_str(prefix);
    end.push(MAX_UNICODE_RUNE);
    end
}
