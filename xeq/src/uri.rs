use std::cell::Cell;

use url::{SyntaxViolation, Url};

use crate::error::{self, Error};

/// Parse a URL the way a browser would, repairing what it can.
pub fn parse(input: &str) -> error::Result<Url> {
    Ok(Url::parse(input)?)
}

/// Like [`parse`], with failure as `None`.
pub fn parse_option(input: &str) -> Option<Url> {
    Url::parse(input).ok()
}

/// Parse a URL, rejecting inputs the parser only accepts after repairing
/// them, such as backslashes used as path separators or embedded
/// whitespace.
pub fn parse_strict(input: &str) -> error::Result<Url> {
    let violation = Cell::new(None);
    let record = |v: SyntaxViolation| violation.set(Some(v));
    let url = Url::options()
        .syntax_violation_callback(Some(&record))
        .parse(input)?;
    match violation.get() {
        Some(v) => Err(Error::UriViolation(v)),
        None => Ok(url),
    }
}

/// The value of the first query parameter with this name.
pub fn query_param(name: &str, url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

/// A copy of the URL with the named query parameter set to `value`.
///
/// The first pair with that name is replaced in place and later pairs with
/// the same name are dropped; when the name is new the pair is appended.
/// All other pairs keep their relative order. The input is not touched.
pub fn with_query_param(name: &str, value: &str, url: &Url) -> Url {
    let mut replaced = false;
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (k, v) in url.query_pairs() {
        if k == name {
            if !replaced {
                pairs.push((name.to_string(), value.to_string()));
                replaced = true;
            }
            // later pairs with the name are dropped
        } else {
            pairs.push((k.into_owned(), v.into_owned()));
        }
    }
    if !replaced {
        pairs.push((name.to_string(), value.to_string()));
    }
    let mut result = url.clone();
    {
        let mut query = result.query_pairs_mut();
        query.clear();
        for (k, v) in &pairs {
            query.append_pair(k, v);
        }
    }
    result
}
