// Query parser
// Extracts the two name parameters using application/x-www-form-urlencoded rules

use url::form_urlencoded;

use super::GreetingRequest;

pub const FIRST_NAME_KEY: &str = "First name";
pub const LAST_NAME_KEY: &str = "Last name";

/// Parse a raw query string into the two optional names.
///
/// Decoding never fails: `+` becomes a space, valid `%XX` sequences are
/// decoded, invalid ones are kept literally and invalid UTF-8 is replaced.
/// The first occurrence of a key wins, even when its value is empty.
pub fn parse_names(query: &str) -> GreetingRequest {
    let mut first_name: Option<String> = None;
    let mut last_name: Option<String> = None;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let slot = match &*key {
            FIRST_NAME_KEY => &mut first_name,
            LAST_NAME_KEY => &mut last_name,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }

    GreetingRequest {
        first_name: first_name.filter(|v| !v.is_empty()),
        last_name: last_name.filter(|v| !v.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(query: &str) -> (Option<String>, Option<String>) {
        let parsed = parse_names(query);
        (parsed.first_name, parsed.last_name)
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(names(""), (None, None));
    }

    #[test]
    fn test_plus_and_percent_encoded_keys() {
        let expected = (Some("Bob".to_string()), Some("Builder".to_string()));
        assert_eq!(names("First+name=Bob&Last+name=Builder"), expected);
        assert_eq!(names("First%20name=Bob&Last%20name=Builder"), expected);
    }

    #[test]
    fn test_single_name() {
        assert_eq!(names("Last+name=Builder"), (None, Some("Builder".to_string())));
        assert_eq!(names("First+name=Bob"), (Some("Bob".to_string()), None));
    }

    #[test]
    fn test_empty_value_is_absent() {
        assert_eq!(names("First+name=&Last+name="), (None, None));
        assert_eq!(names("First+name&Last+name=Builder"), (None, Some("Builder".to_string())));
    }

    #[test]
    fn test_keys_are_case_and_space_sensitive() {
        assert_eq!(names("first+name=Bob&Last_name=Builder&Firstname=X"), (None, None));
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(
            names("First+name=Bob&First+name=Wendy"),
            (Some("Bob".to_string()), None)
        );
        assert_eq!(names("First+name=&First+name=Wendy"), (None, None));
    }

    #[test]
    fn test_malformed_segments_are_tolerated() {
        assert_eq!(
            names("%zz&&=orphan&First+name=B%6Fb&Last+name=100%"),
            (Some("Bob".to_string()), Some("100%".to_string()))
        );
        assert_eq!(names("First+name=%FF"), (Some("\u{FFFD}".to_string()), None));
    }

    #[test]
    fn test_encoded_names_round_trip() {
        let pairs = [
            ("Bob", "Builder"),
            ("Mary Jane", "Watson-Parker"),
            ("O'Neil", "d+Artagnan"),
            ("100%", "#1 ~fan~"),
            ("  padded ", "x/y?z"),
        ];
        for (first, last) in pairs {
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair(FIRST_NAME_KEY, first)
                .append_pair(LAST_NAME_KEY, last)
                .finish();
            assert_eq!(
                names(&query),
                (Some(first.to_string()), Some(last.to_string())),
                "round trip failed for {query}"
            );
        }
    }
}
