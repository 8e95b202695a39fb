/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Pagination support for list/describe operations.
//!
//! The shape crates only declare the token plumbing: inputs that accept a
//! continuation token implement [`PageableRequest`], outputs that return one
//! implement [`PagedOutput`]. [`Paginator`] stitches the two together around
//! a caller-supplied page function, so no transport concerns live here.

/// A request shape that carries a pagination token (`Marker`, `NextToken`, ...).
pub trait PageableRequest {
    /// Replaces the continuation token for the next page request.
    fn set_page_token(&mut self, token: Option<String>);

    /// Turns this request into an iterator of pages driven by `page_fn`.
    ///
    /// `page_fn` is invoked once per page with the current request; the
    /// paginator feeds each output's continuation token back into the
    /// request until the service stops returning one.
    fn paginate<O, E, F>(self, page_fn: F) -> Paginator<Self, F>
    where
        Self: Sized,
        O: PagedOutput,
        F: FnMut(&Self) -> Result<O, E>,
    {
        Paginator::new(self, page_fn)
    }
}

/// An output shape that exposes the continuation token for the next page.
pub trait PagedOutput {
    /// Returns the token identifying the next page, if the service sent one.
    fn next_page_token(&self) -> Option<&str>;
}

/// Iterator over the pages of a paginated operation.
///
/// Yields `Result<O, E>` items. Iteration ends after the first page whose
/// token is absent or empty, after a repeated token (a defect some services
/// exhibit on their last page), or after the first error.
#[derive(Debug)]
pub struct Paginator<I, F> {
    input: I,
    page_fn: F,
    last_token: Option<String>,
    done: bool,
}

impl<I, F> Paginator<I, F> {
    /// Creates a paginator from an initial request and a page function.
    pub fn new(input: I, page_fn: F) -> Self {
        Paginator {
            input,
            page_fn,
            last_token: None,
            done: false,
        }
    }
}

impl<I, O, E, F> Iterator for Paginator<I, F>
where
    I: PageableRequest,
    O: PagedOutput,
    F: FnMut(&I) -> Result<O, E>,
{
    type Item = Result<O, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let output = match (self.page_fn)(&self.input) {
            Ok(output) => output,
            Err(err) => {
                self.done = true;
                return Some(Err(err));
            }
        };
        match output.next_page_token() {
            Some(token) if !token.is_empty() && self.last_token.as_deref() != Some(token) => {
                tracing::trace!(token = %token, "advancing to next page");
                self.last_token = Some(token.to_owned());
                self.input.set_page_token(self.last_token.clone());
            }
            _ => {
                tracing::trace!("no further pages");
                self.done = true;
            }
        }
        Some(Ok(output))
    }
}

#[cfg(test)]
mod test {
    use super::{PageableRequest, PagedOutput};

    #[derive(Default)]
    struct ListWidgetsRequest {
        marker: Option<String>,
    }

    impl PageableRequest for ListWidgetsRequest {
        fn set_page_token(&mut self, token: Option<String>) {
            self.marker = token;
        }
    }

    struct ListWidgetsOutput {
        widgets: Vec<&'static str>,
        next_marker: Option<&'static str>,
    }

    impl PagedOutput for ListWidgetsOutput {
        fn next_page_token(&self) -> Option<&str> {
            self.next_marker
        }
    }

    #[test]
    fn stops_when_token_is_absent() {
        let mut calls = 0;
        let pages = ListWidgetsRequest::default().paginate(|req: &ListWidgetsRequest| {
            calls += 1;
            Ok::<_, ()>(match req.marker.as_deref() {
                None => ListWidgetsOutput {
                    widgets: vec!["a", "b"],
                    next_marker: Some("page-2"),
                },
                Some("page-2") => ListWidgetsOutput {
                    widgets: vec!["c"],
                    next_marker: None,
                },
                other => panic!("unexpected marker {:?}", other),
            })
        });
        let widgets: Vec<_> = pages
            .map(|page| page.unwrap().widgets)
            .flatten()
            .collect();
        assert_eq!(widgets, vec!["a", "b", "c"]);
        assert_eq!(calls, 2);
    }

    #[test]
    fn stops_when_token_repeats() {
        let pages = ListWidgetsRequest::default().paginate(|_req: &ListWidgetsRequest| {
            Ok::<_, ()>(ListWidgetsOutput {
                widgets: vec!["x"],
                next_marker: Some("same-token"),
            })
        });
        // First page advances to "same-token"; the second page returns it
        // again, which terminates iteration instead of looping forever.
        assert_eq!(pages.count(), 2);
    }

    #[test]
    fn stops_on_empty_token() {
        let pages = ListWidgetsRequest::default().paginate(|_req: &ListWidgetsRequest| {
            Ok::<_, ()>(ListWidgetsOutput {
                widgets: vec![],
                next_marker: Some(""),
            })
        });
        assert_eq!(pages.count(), 1);
    }

    #[test]
    fn yields_the_error_and_stops() {
        let mut pages = ListWidgetsRequest::default()
            .paginate(|_req: &ListWidgetsRequest| Err::<ListWidgetsOutput, _>("boom"));
        assert_eq!(pages.next().map(|r| r.err()), Some(Some("boom")));
        assert!(pages.next().is_none());
    }
}
