//! [`ModalSurface`] over the real document
//!
//! Elements are looked up once, by id, when the surface is built.

use wasm_bindgen_x::JsCast;

use crate::surface::{Marker, ModalSurface, TextField};

/// Element ids the page must use for the modal.
pub mod ids {
    pub const ROOT: &str = "policy-modal";
    pub const TITLE: &str = "modal-title";
    pub const DESC: &str = "modal-desc";
    pub const IMAGE: &str = "modal-img";
    pub const CATEGORY: &str = "modal-category";
    pub const DATE: &str = "modal-date";
    pub const REGION: &str = "modal-region";
    pub const LINK: &str = "modal-link";
    pub const HEART_BUTTON: &str = "modal-heart-btn";
    pub const CLOSE_BUTTON: &str = "modal-close-btn";
    /// Optional `<script type="application/json">` holding a config override
    pub const CONFIG: &str = "policy-modal-config";
}

/// Attribute set on the like button so the page can tell which policy is shown
pub const POLICY_ID_ATTRIBUTE: &str = "data-policy-id";

pub struct DomModalSurface {
    root: Option<web_sys_x::Element>,
    body: Option<web_sys_x::HtmlElement>,
    title: Option<web_sys_x::HtmlElement>,
    desc: Option<web_sys_x::HtmlElement>,
    category: Option<web_sys_x::HtmlElement>,
    date: Option<web_sys_x::HtmlElement>,
    region: Option<web_sys_x::HtmlElement>,
    image: Option<web_sys_x::Element>,
    link: Option<web_sys_x::Element>,
    heart_button: Option<web_sys_x::Element>,
}

impl DomModalSurface {
    /// Resolve the modal's elements.
    ///
    /// Without a root the surface reports itself detached, so every open
    /// attempt fails with a missing-element error.
    pub fn locate(document: &web_sys_x::Document) -> Self {
        let html = |id: &str| {
            document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<web_sys_x::HtmlElement>().ok())
        };

        Self {
            root: document.get_element_by_id(ids::ROOT),
            body: document.body(),
            title: html(ids::TITLE),
            desc: html(ids::DESC),
            category: html(ids::CATEGORY),
            date: html(ids::DATE),
            region: html(ids::REGION),
            image: document.get_element_by_id(ids::IMAGE),
            link: document.get_element_by_id(ids::LINK),
            heart_button: document.get_element_by_id(ids::HEART_BUTTON),
        }
    }

    pub fn root(&self) -> Option<&web_sys_x::Element> {
        self.root.as_ref()
    }

    fn text_target(&self, field: TextField) -> Option<&web_sys_x::HtmlElement> {
        match field {
            TextField::Title => self.title.as_ref(),
            TextField::Desc => self.desc.as_ref(),
            TextField::Category => self.category.as_ref(),
            TextField::Date => self.date.as_ref(),
            TextField::Region => self.region.as_ref(),
        }
    }
}

impl ModalSurface for DomModalSurface {
    fn is_attached(&self) -> bool {
        self.root.as_ref().is_some_and(|root| root.is_connected())
    }

    fn set_text(&mut self, field: TextField, text: &str) {
        if let Some(el) = self.text_target(field) {
            el.set_inner_text(text);
        }
    }

    fn set_image(&mut self, src: &str) {
        if let Some(img) = &self.image {
            let _ = img.set_attribute("src", src);
        }
    }

    fn set_link(&mut self, href: Option<&str>) {
        let Some(link) = &self.link else {
            return;
        };
        let class_list = link.class_list();
        match href {
            Some(href) => {
                let _ = link.set_attribute("href", href);
                let _ = class_list.remove_1(Marker::Hidden.class_name());
            }
            None => {
                let _ = link.remove_attribute("href");
                let _ = class_list.add_1(Marker::Hidden.class_name());
            }
        }
    }

    fn set_accent(&mut self, color: Option<&str>) {
        let Some(category) = &self.category else {
            return;
        };
        let style = category.style();
        match color {
            Some(color) => {
                let _ = style.set_property("background-color", color);
            }
            None => {
                let _ = style.remove_property("background-color");
            }
        }
    }

    fn set_policy_id(&mut self, id: Option<&str>) {
        let Some(button) = &self.heart_button else {
            return;
        };
        match id {
            Some(id) => {
                let _ = button.set_attribute(POLICY_ID_ATTRIBUTE, id);
            }
            None => {
                let _ = button.remove_attribute(POLICY_ID_ATTRIBUTE);
            }
        }
    }

    fn set_marker(&mut self, marker: Marker, present: bool) {
        let Some(root) = &self.root else {
            return;
        };
        let class_list = root.class_list();
        let _ = if present {
            class_list.add_1(marker.class_name())
        } else {
            class_list.remove_1(marker.class_name())
        };
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let Some(body) = &self.body else {
            return;
        };
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
}
