// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation highlighting and in-page click handling.
//!
//! On the home route the highlight follows the scroll position (the resolver's
//! current section). On any other route it follows the path.

use alloc::string::String;

/// Path of the single-page home route.
pub const HOME_ROUTE: &str = "/";

/// One navigation link.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NavItem {
    /// Link target, for example `"/about"` or `"/#services"`.
    pub href: String,
    /// Home-page section this link corresponds to.
    pub section_id: String,
}

/// What a click on a [`NavItem`] should do.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavAction {
    /// Already home: scroll the document back to the top.
    ScrollToTop,
    /// Already home: scroll the section with this id into view.
    ScrollToAnchor(String),
    /// Let the router navigate to this href.
    Navigate(String),
}

impl NavItem {
    /// Creates a link.
    pub fn new(href: impl Into<String>, section_id: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            section_id: section_id.into(),
        }
    }

    /// Whether this link is highlighted on `pathname` while `current` is the
    /// active section.
    #[must_use]
    pub fn is_active(&self, pathname: &str, current: &str) -> bool {
        if pathname == HOME_ROUTE {
            self.section_id == current
        } else {
            self.href == pathname
        }
    }

    /// The action for a click on this link while at `pathname`.
    #[must_use]
    pub fn click_action(&self, pathname: &str) -> NavAction {
        if pathname != HOME_ROUTE {
            return NavAction::Navigate(self.href.clone());
        }
        if self.href == HOME_ROUTE {
            return NavAction::ScrollToTop;
        }
        match self.href.strip_prefix("/#") {
            Some(anchor) if !anchor.is_empty() => NavAction::ScrollToAnchor(String::from(anchor)),
            _ => NavAction::Navigate(self.href.clone()),
        }
    }
}
