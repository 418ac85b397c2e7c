//! Paginated list responses.
//!
//! OCI list calls return one page at a time together with an `opc-next-page`
//! token. [`Pages`] hides that behind an iterator which only requests the next
//! page once the buffered items are used up.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use std::error::Error;

/// One page of a list response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Records in this page.
    pub data: Vec<T>,
    /// Token for the next page (None on the last page).
    #[serde(rename = "opc-next-page", default)]
    pub next_page: Option<String>,
}

impl<T> Page<T> {
    /// A final page holding `data`.
    pub fn last(data: Vec<T>) -> Page<T> {
        Page {
            data,
            next_page: None,
        }
    }
}

/// Response of a get call: `{"data": {...}, "etag": "..."}`.
#[derive(Deserialize, Debug)]
pub struct Item<T> {
    pub data: T,
}

/// Parse the stdout of an `oci ... list` command.
///
/// The CLI prints nothing at all when a list is empty, so blank output is an
/// empty last page.
pub fn parse_page<T: DeserializeOwned>(output: &str) -> Result<Page<T>, Box<dyn Error>> {
    if output.trim().is_empty() {
        return Ok(Page::last(Vec::new()));
    }
    parse_json(output)
}

/// Parse the stdout of an `oci ... get` command.
pub fn parse_item<T: DeserializeOwned>(output: &str) -> Result<T, Box<dyn Error>> {
    if output.trim().is_empty() {
        return Err("Empty response".into());
    }
    let item: Item<T> = parse_json(output)?;
    Ok(item.data)
}

fn parse_json<T: DeserializeOwned>(output: &str) -> Result<T, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(output);
    let parsed = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::debug!("OUTPUT START:\n\n{}\n\nOUTPUT END\n", output);
        format!("Error parsing JSON: path={} error={}", e.path(), e)
    })?;
    Ok(parsed)
}

/// Lazy iterator over every item of a paginated listing.
///
/// `fetch` is called with `None` for the first page and with the previous
/// page's token afterwards. An error ends the iteration after being yielded
/// once. A token that was already followed is an error, since following it
/// again would loop forever.
pub struct Pages<T, F>
where
    F: FnMut(Option<&str>) -> Result<Page<T>, Box<dyn Error>>,
{
    fetch: F,
    buffer: VecDeque<T>,
    next_page: Option<String>,
    started: bool,
    done: bool,
    pages_fetched: usize,
    seen_tokens: HashSet<String>,
}

impl<T, F> Pages<T, F>
where
    F: FnMut(Option<&str>) -> Result<Page<T>, Box<dyn Error>>,
{
    pub fn new(fetch: F) -> Self {
        Pages {
            fetch,
            buffer: VecDeque::new(),
            next_page: None,
            started: false,
            done: false,
            pages_fetched: 0,
            seen_tokens: HashSet::new(),
        }
    }

    fn fetch_next(&mut self) -> Result<(), Box<dyn Error>> {
        let token = self.next_page.take();
        if let Some(t) = &token {
            self.seen_tokens.insert(t.clone());
        }
        let page = (self.fetch)(token.as_deref())?;
        self.started = true;
        self.pages_fetched += 1;

        log::debug!(
            "got page#{:2} record_count=+{:3} next_page={:?}",
            self.pages_fetched,
            page.data.len(),
            page.next_page
        );

        if let Some(next) = &page.next_page {
            if self.seen_tokens.contains(next) {
                return Err(format!(
                    "Page token {next:?} repeated after page {} - possible infinite loop",
                    self.pages_fetched
                )
                .into());
            }
        }
        self.buffer.extend(page.data);
        self.next_page = page.next_page;
        Ok(())
    }
}

impl<T, F> Iterator for Pages<T, F>
where
    F: FnMut(Option<&str>) -> Result<Page<T>, Box<dyn Error>>,
{
    type Item = Result<T, Box<dyn Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Some(Ok(item));
            }
            if self.done || (self.started && self.next_page.is_none()) {
                return None;
            }
            if let Err(e) = self.fetch_next() {
                self.done = true;
                return Some(Err(e));
            }
        }
    }
}
