//! What the controller needs from the page

use policy_common::{Markers, ModalContent};

/// Text targets inside the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextField {
    Title,
    Desc,
    Category,
    Date,
    Region,
}

/// Class markers on the modal root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Marker {
    Hidden,
    Active,
}

impl Marker {
    pub fn class_name(self) -> &'static str {
        match self {
            Marker::Hidden => "hidden",
            Marker::Active => "active",
        }
    }
}

/// The modal's elements and the page body, as seen by the controller.
///
/// Every target except the root is optional; implementations skip targets
/// that do not exist. Setting a marker that is already in the requested
/// state must be a no-op.
pub trait ModalSurface {
    /// Whether the root element is still in the document.
    fn is_attached(&self) -> bool;

    fn set_text(&mut self, field: TextField, text: &str);

    fn set_image(&mut self, src: &str);

    /// `None` hides the link.
    fn set_link(&mut self, href: Option<&str>);

    /// Category badge background; `None` clears it.
    fn set_accent(&mut self, color: Option<&str>);

    /// Tags the like button with the policy id; `None` removes the tag.
    fn set_policy_id(&mut self, id: Option<&str>);

    fn set_marker(&mut self, marker: Marker, present: bool);

    fn set_scroll_locked(&mut self, locked: bool);

    /// Write every content field.
    fn render(&mut self, content: &ModalContent) {
        self.set_text(TextField::Title, &content.title);
        self.set_text(TextField::Desc, &content.desc);
        self.set_text(TextField::Category, &content.category);
        self.set_text(TextField::Date, &content.date);
        self.set_text(TextField::Region, &content.region);
        self.set_image(&content.image_src);
        self.set_link(content.link.as_deref());
        self.set_accent(content.accent_color.as_deref());
        self.set_policy_id(content.policy_id.as_deref());
    }

    /// Bring markers and scroll lock in line with a visibility state.
    ///
    /// Removals happen before additions so the root never carries both
    /// markers at once.
    fn apply_markers(&mut self, markers: Markers) {
        if !markers.active {
            self.set_marker(Marker::Active, false);
        }
        if !markers.hidden {
            self.set_marker(Marker::Hidden, false);
        }
        if markers.hidden {
            self.set_marker(Marker::Hidden, true);
        }
        if markers.active {
            self.set_marker(Marker::Active, true);
        }
        self.set_scroll_locked(markers.scroll_locked);
    }
}
