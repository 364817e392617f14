//! Mobile navigation menu.
//!
//! The menu is either open or closed; the toggle icon follows that state
//! (`fa-bars` when closed, `fa-times` when open). Link clicks scroll to the
//! target section offset by the sticky navbar height, close the menu and move
//! the active marker to the clicked link.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuIcon {
    Bars,
    Times,
}

impl MenuIcon {
    pub fn class(self) -> &'static str {
        match self {
            MenuIcon::Bars => "fa-bars",
            MenuIcon::Times => "fa-times",
        }
    }
}

/// Something the host must apply to the document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavEffect {
    /// Toggle the `active` class on the links container.
    SetMenuOpen { open: bool },
    /// Swap the toggle button's icon class.
    SetIcon { icon: MenuIcon },
    /// Smooth-scroll the window to `top`.
    ScrollTo { top: f64 },
    /// Move the `active` class to the link with this href.
    SetActiveLink { href: String },
}

#[derive(Clone, Debug, Default)]
pub struct MobileNav {
    open: bool,
    active: Option<String>,
}

impl MobileNav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn icon(&self) -> MenuIcon {
        if self.open {
            MenuIcon::Times
        } else {
            MenuIcon::Bars
        }
    }

    pub fn active_link(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Toggle button pressed.
    pub fn toggle(&mut self) -> Vec<NavEffect> {
        self.set_open(!self.open)
    }

    /// A link inside the menu was clicked.
    ///
    /// `section_top` is the target section's document offset, or None when
    /// `href` does not resolve to a section; in that case nothing happens.
    pub fn click_link(
        &mut self,
        href: &str,
        section_top: Option<f64>,
        navbar_height: f64,
    ) -> Vec<NavEffect> {
        let Some(top) = section_top else {
            log::debug!("nav link '{href}' has no target section");
            return Vec::new();
        };
        let mut effects = vec![NavEffect::ScrollTo {
            top: top - navbar_height,
        }];
        effects.extend(self.close());
        self.active = Some(href.to_string());
        effects.push(NavEffect::SetActiveLink {
            href: href.to_string(),
        });
        effects
    }

    /// A click landed somewhere in the document.
    pub fn click_document(&mut self, inside_navbar: bool) -> Vec<NavEffect> {
        if inside_navbar {
            return Vec::new();
        }
        self.close()
    }

    /// A key was pressed; Escape dismisses the menu.
    pub fn key_down(&mut self, key: &str) -> Vec<NavEffect> {
        if key != "Escape" {
            return Vec::new();
        }
        self.close()
    }

    /// Close the menu. The icon is always reset to bars, even when the menu
    /// was already closed.
    pub fn close(&mut self) -> Vec<NavEffect> {
        self.set_open(false)
    }

    fn set_open(&mut self, open: bool) -> Vec<NavEffect> {
        self.open = open;
        vec![
            NavEffect::SetMenuOpen { open },
            NavEffect::SetIcon { icon: self.icon() },
        ]
    }
}
