//! Shareable state token
//!
//! A [`PuzzleState`] is encoded as a query string:
//! `l=<26 status digits>[&g=<groups>][&o=<sort order>]`. Values are
//! form-urlencoded, so `ab,c` becomes `ab%2Cc`. The group string is only
//! present when non-empty and the sort order only when it differs from the
//! default.
//!
//! Decoding never fails. Anything missing or malformed falls back to the
//! default for that field.

use super::PuzzleState;
use crate::core::{LetterStatus, LetterStatuses, SortOrder};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

const STATUS_KEY: &str = "l";
const GROUPS_KEY: &str = "g";
const ORDER_KEY: &str = "o";

/// Characters left unescaped by `application/x-www-form-urlencoded`
const FORM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

fn encode_component(value: &str) -> String {
    value
        .split(' ')
        .map(|part| utf8_percent_encode(part, FORM).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

fn decode_component(value: &str) -> String {
    percent_decode_str(&value.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}

/// Encode a snapshot as a query-string token (without the leading `#`)
///
/// # Examples
/// ```
/// use letter_boxed::state::{PuzzleState, encode};
///
/// assert_eq!(encode(&PuzzleState::default()), "l=00000000000000000000000000");
/// ```
#[must_use]
pub fn encode(state: &PuzzleState) -> String {
    let codes: String = state
        .statuses
        .as_array()
        .iter()
        .map(|status| status.code())
        .collect();

    let mut params = vec![(STATUS_KEY, codes)];
    if !state.groups.is_empty() {
        params.push((GROUPS_KEY, state.groups.clone()));
    }
    if state.sort_order != SortOrder::default() {
        params.push((ORDER_KEY, state.sort_order.name().to_string()));
    }

    params
        .iter()
        .map(|(key, value)| format!("{key}={}", encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Encode a snapshot as a location fragment, `#` included
#[must_use]
pub fn to_fragment(state: &PuzzleState) -> String {
    format!("#{}", encode(state))
}

/// Decoded `key=value` pairs in token order
fn parse_params(token: &str) -> Vec<(String, String)> {
    token
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// Decode a token or fragment into a fully-defined snapshot
///
/// A leading `#` (and then `?`) is stripped. The first occurrence of each key
/// wins.
#[must_use]
pub fn decode(fragment: &str) -> PuzzleState {
    let token = fragment.strip_prefix('#').unwrap_or(fragment);
    let token = token.strip_prefix('?').unwrap_or(token);
    let params = parse_params(token);

    let param = |key: &str| {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.as_str())
    };

    let statuses = param(STATUS_KEY).map_or_else(LetterStatuses::new, decode_statuses);
    let groups = param(GROUPS_KEY).unwrap_or_default().to_string();
    let sort_order = param(ORDER_KEY)
        .and_then(SortOrder::from_name)
        .unwrap_or_default();

    PuzzleState {
        statuses,
        groups,
        sort_order,
    }
}

/// Status digits for `a`-`z`; a string of any other length is ignored and
/// unknown digits leave that letter excluded
fn decode_statuses(codes: &str) -> LetterStatuses {
    if codes.chars().count() != 26 {
        return LetterStatuses::new();
    }

    let mut statuses = [LetterStatus::Excluded; 26];
    for (slot, code) in statuses.iter_mut().zip(codes.chars()) {
        if let Some(status) = LetterStatus::from_code(code) {
            *slot = status;
        }
    }
    LetterStatuses::from_array(statuses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{join_groups, parse_groups};
    use proptest::prelude::*;

    #[test]
    fn default_state_encodes_statuses_only() {
        assert_eq!(
            encode(&PuzzleState::default()),
            "l=00000000000000000000000000"
        );
    }

    #[test]
    fn empty_fragment_decodes_to_default() {
        assert_eq!(decode(""), PuzzleState::default());
        assert_eq!(decode("#"), PuzzleState::default());
    }

    #[test]
    fn encodes_groups_and_non_default_order() {
        let state = PuzzleState {
            statuses: LetterStatuses::new()
                .with_status('a', LetterStatus::Available)
                .with_status('b', LetterStatus::RequiredStart)
                .with_status('c', LetterStatus::RequiredAnywhere)
                .with_status('z', LetterStatus::RequiredEnd),
            groups: "ab,c".to_string(),
            sort_order: SortOrder::AlphabeticalAsc,
        };

        let token = encode(&state);
        assert_eq!(
            token,
            "l=12300000000000000000000004&g=ab%2Cc&o=alphabetical-asc"
        );
        assert_eq!(decode(&token), state);
        assert_eq!(decode(&to_fragment(&state)), state);
    }

    #[test]
    fn wrong_length_statuses_default_to_excluded() {
        let state = decode("l=111");
        assert_eq!(state.statuses, LetterStatuses::new());

        let state = decode("l=111111111111111111111111111");
        assert_eq!(state.statuses, LetterStatuses::new());
    }

    #[test]
    fn unknown_digits_leave_letter_excluded() {
        let state = decode("#l=19000000000000000000000004");
        assert_eq!(state.statuses.status('a'), LetterStatus::Available);
        assert_eq!(state.statuses.status('b'), LetterStatus::Excluded);
        assert_eq!(state.statuses.status('z'), LetterStatus::RequiredEnd);
    }

    #[test]
    fn unknown_sort_order_falls_back() {
        assert_eq!(decode("o=shortest").sort_order, SortOrder::LengthDesc);
        assert_eq!(decode("o=length-asc").sort_order, SortOrder::LengthAsc);
    }

    #[test]
    fn garbage_never_fails() {
        for token in ["&&&", "=", "g", "l=%ZZ", "#?o=&g=&l=", "%%%", "l==="] {
            let state = decode(token);
            assert_eq!(state.sort_order, SortOrder::LengthDesc);
        }
    }

    #[test]
    fn first_occurrence_wins() {
        let state = decode("g=ab&g=cd");
        assert_eq!(state.groups, "ab");
    }

    #[test]
    fn plus_and_escapes_decode() {
        let state = decode("g=a%2Cb+c");
        assert_eq!(state.groups, "a,b c");
    }

    fn state_strategy() -> impl Strategy<Value = PuzzleState> {
        (
            prop::array::uniform26(prop::sample::select(LetterStatus::ALL.to_vec())),
            "[a-z]{0,4}(,[a-z]{1,4}){0,3}",
            prop::sample::select(SortOrder::ALL.to_vec()),
        )
            .prop_map(|(statuses, groups, sort_order)| PuzzleState {
                statuses: LetterStatuses::from_array(statuses),
                groups: join_groups(&parse_groups(&groups)),
                sort_order,
            })
    }

    proptest! {
        #[test]
        fn round_trips(state in state_strategy()) {
            prop_assert_eq!(decode(&encode(&state)), state.clone());
            prop_assert_eq!(decode(&to_fragment(&state)), state);
        }
    }
}
