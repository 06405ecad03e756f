use web_sys::{window, ScrollBehavior, ScrollToOptions};

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Services,
    Coaching,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Coaching,
        SectionId::Contact,
    ];

    /// DOM id of the section element.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Coaching => "coaching",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Inicio",
            SectionId::About => "¿Quién soy?",
            SectionId::Services => "Servicios",
            SectionId::Coaching => "¿Qué es Coaching?",
            SectionId::Contact => "Contacto",
        }
    }
}

/// First section whose box straddles the probe line, in page order.
pub fn active_section<I>(bounds: I, probe: f64) -> Option<SectionId>
where
    I: IntoIterator<Item = (SectionId, f64, f64)>,
{
    bounds
        .into_iter()
        .find(|(_, top, bottom)| *top <= probe && *bottom >= probe)
        .map(|(section, _, _)| section)
}

/// Absolute scroll position that puts `element_top` just below the navbar.
pub fn scroll_target(element_top: f64, page_offset: f64, nav_offset: f64) -> f64 {
    (element_top + page_offset - nav_offset).max(0.0)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLLED_AFTER
}

/// Reads the live section boxes and picks the one under the navbar.
pub fn current_section() -> Option<SectionId> {
    let document = window()?.document()?;
    let bounds = SectionId::ALL.into_iter().filter_map(|section| {
        let rect = document.get_element_by_id(section.anchor())?.get_bounding_client_rect();
        Some((section, rect.top(), rect.bottom()))
    });
    active_section(bounds, config::NAV_ACTIVE_PROBE)
}

/// Smooth-scrolls to `section`. Returns false when the section isn't in the DOM.
pub fn scroll_to_section(section: SectionId) -> bool {
    let Some(window) = window() else {
        return false;
    };
    let Some(element) = window
        .document()
        .and_then(|document| document.get_element_by_id(section.anchor()))
    else {
        return false;
    };

    let top = element.get_bounding_client_rect().top();
    let page_offset = window.scroll_y().unwrap_or(0.0);
    let options = ScrollToOptions::new();
    options.set_top(scroll_target(top, page_offset, config::NAV_SCROLL_OFFSET));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_section_under_the_probe() {
        let bounds = vec![
            (SectionId::Home, -900.0, -40.0),
            (SectionId::About, -40.0, 600.0),
            (SectionId::Services, 600.0, 2200.0),
        ];
        assert_eq!(active_section(bounds, 100.0), Some(SectionId::About));
    }

    #[test]
    fn boundaries_are_inclusive() {
        let bounds = vec![(SectionId::Services, 100.0, 900.0), (SectionId::Contact, 50.0, 100.0)];
        assert_eq!(active_section(bounds, 100.0), Some(SectionId::Services));
    }

    #[test]
    fn nothing_under_probe_yields_none() {
        let bounds = vec![(SectionId::Contact, 300.0, 900.0)];
        assert_eq!(active_section(bounds, 100.0), None);
    }

    #[test]
    fn scroll_target_leaves_room_for_navbar() {
        assert_eq!(scroll_target(500.0, 1200.0, 80.0), 1620.0);
        assert_eq!(scroll_target(20.0, 0.0, 80.0), 0.0);
    }

    #[test]
    fn scrolled_only_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
    }

    #[test]
    fn anchors_match_hrefs() {
        for section in SectionId::ALL {
            assert_eq!(section.href(), format!("#{}", section.anchor()));
        }
        assert_eq!(SectionId::Services.href(), "#services");
    }
}
