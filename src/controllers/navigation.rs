use crate::models::SectionId;

/// Something that can bring a named page region into view.
pub trait SectionScroller {
    /// Smooth-scrolls to the region. Returns `false` when no such region is rendered.
    fn scroll_to(&self, section: SectionId) -> bool;
}

/// Scrolls to `section` and closes the mobile menu.
///
/// A region that is not rendered is a silent no-op: nothing scrolls and the
/// menu flag is left as it was.
pub fn activate<S: SectionScroller + ?Sized>(
    scroller: &S,
    section: SectionId,
    mobile_menu_open: &mut bool,
) {
    if scroller.scroll_to(section) {
        *mobile_menu_open = false;
    } else {
        tracing::trace!(%section, "section not rendered, ignoring navigation");
    }
}

/// Like [`activate`] for a raw identifier such as a URL fragment. A leading
/// `#` is accepted.
pub fn activate_str<S: SectionScroller + ?Sized>(
    scroller: &S,
    id: &str,
    mobile_menu_open: &mut bool,
) {
    let id = id.strip_prefix('#').unwrap_or(id);
    if id.is_empty() {
        return;
    }
    match id.parse::<SectionId>() {
        Ok(section) => activate(scroller, section, mobile_menu_open),
        Err(e) => tracing::trace!(error = %e, "ignoring navigation"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Pretends only some regions are rendered and records scroll requests.
    struct FakePage {
        rendered: Vec<SectionId>,
        scrolled: RefCell<Vec<SectionId>>,
    }

    impl FakePage {
        fn with(rendered: &[SectionId]) -> Self {
            Self {
                rendered: rendered.to_vec(),
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl SectionScroller for FakePage {
        fn scroll_to(&self, section: SectionId) -> bool {
            if self.rendered.contains(&section) {
                self.scrolled.borrow_mut().push(section);
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn closes_menu_for_every_rendered_section() {
        let page = FakePage::with(&SectionId::ALL);
        for section in SectionId::ALL {
            let mut open = true;
            activate(&page, section, &mut open);
            assert!(!open, "{section} left the menu open");
        }
        assert_eq!(*page.scrolled.borrow(), SectionId::ALL.to_vec());
    }

    #[test]
    fn missing_region_is_a_no_op() {
        let page = FakePage::with(&[SectionId::Home]);
        let mut open = true;
        activate(&page, SectionId::Gallery, &mut open);
        assert!(open);
        assert!(page.scrolled.borrow().is_empty());
    }

    #[test]
    fn unknown_identifier_is_a_no_op() {
        let page = FakePage::with(&SectionId::ALL);
        let mut open = true;
        activate_str(&page, "careers", &mut open);
        assert!(open);

        activate_str(&page, "menu", &mut open);
        assert!(!open);
        assert_eq!(*page.scrolled.borrow(), vec![SectionId::Menu]);
    }

    #[test]
    fn url_fragment_names_a_section() {
        let page = FakePage::with(&SectionId::ALL);
        let mut open = true;
        activate_str(&page, "", &mut open);
        activate_str(&page, "#", &mut open);
        assert!(open);
        assert!(page.scrolled.borrow().is_empty());

        activate_str(&page, "#franchise", &mut open);
        assert!(!open);
        assert_eq!(*page.scrolled.borrow(), vec![SectionId::Franchise]);
    }

    #[test]
    fn closed_menu_stays_closed() {
        let page = FakePage::with(&SectionId::ALL);
        let mut open = false;
        activate(&page, SectionId::Contact, &mut open);
        assert!(!open);
    }
}
