//! Successful service responses.

use std::collections::HashMap;

/// A decoded 2xx response.
#[derive(Debug, Clone, PartialEq)]
pub struct WatsonResponse<T> {
    /// Decoded body.
    pub result: T,
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers with lowercased names.
    pub headers: HashMap<String, String>,
}

impl<T> WatsonResponse<T> {
    pub fn new(result: T, status_code: u16, headers: HashMap<String, String>) -> Self {
        Self {
            result,
            status_code,
            headers,
        }
    }

    /// Look up a response header by name, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Transform the decoded body while keeping status and headers.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> WatsonResponse<U> {
        WatsonResponse {
            result: f(self.result),
            status_code: self.status_code,
            headers: self.headers,
        }
    }

    pub fn into_result(self) -> T {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("x-global-transaction-id".to_string(), "abc".to_string());
        let resp = WatsonResponse::new(1u8, 200, headers);
        assert_eq!(resp.header("X-Global-Transaction-Id"), Some("abc"));
        assert_eq!(resp.map(|n| n + 1).result, 2);
    }
}
