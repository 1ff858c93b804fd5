use clap::Args;
use detailing_browser_impl::{TerminalFaqView, TerminalNavView};
use detailing_config::Config;
use detailing_core_faq_contracts::FaqFeatureService;
use detailing_core_nav_contracts::{ClickTarget, NavFeatureService};
use detailing_models::page::PageSection;

use crate::environment;

#[derive(Debug, Args)]
pub struct PageCommand {
    /// Interactions to replay in order: `toggle`, `link`, `click-menu`,
    /// `click-outside`, `scroll=<offset>` or `faq=<index>`
    #[arg(required = true, value_parser = parse_event)]
    events: Vec<PageEvent>,
}

impl PageCommand {
    pub fn invoke(self, config: Config) -> anyhow::Result<()> {
        let nav = environment::nav_feature(TerminalNavView::new());
        let faq = environment::faq_feature(&config, TerminalFaqView::new());
        run(&nav, &faq, &config.page.sections, &self.events)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    Toggle,
    LinkClicked,
    Clicked(ClickTarget),
    Scrolled(f64),
    FaqQuestionClicked(usize),
}

fn parse_event(s: &str) -> Result<PageEvent, String> {
    let event = match s.split_once('=') {
        None => match s {
            "toggle" => PageEvent::Toggle,
            "link" => PageEvent::LinkClicked,
            "click-menu" => PageEvent::Clicked(ClickTarget::Menu),
            "click-outside" => PageEvent::Clicked(ClickTarget::Outside),
            _ => return Err(format!("unknown page event {s:?}")),
        },
        Some(("scroll", offset)) => PageEvent::Scrolled(
            offset
                .parse()
                .map_err(|err| format!("invalid scroll offset {offset:?}: {err}"))?,
        ),
        Some(("faq", index)) => PageEvent::FaqQuestionClicked(
            index
                .parse()
                .map_err(|err| format!("invalid FAQ item {index:?}: {err}"))?,
        ),
        Some(_) => return Err(format!("unknown page event {s:?}")),
    };
    Ok(event)
}

/// Replays `events` against the navigation and FAQ features.
pub fn run(
    nav: &impl NavFeatureService,
    faq: &impl FaqFeatureService,
    sections: &[PageSection],
    events: &[PageEvent],
) -> anyhow::Result<()> {
    for &event in events {
        match event {
            PageEvent::Toggle => nav.toggle(),
            PageEvent::LinkClicked => nav.link_clicked(),
            PageEvent::Clicked(target) => nav.document_clicked(target),
            PageEvent::Scrolled(offset) => nav.scrolled(offset, sections),
            PageEvent::FaqQuestionClicked(index) => faq.question_clicked(index)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use detailing_config::DEFAULT_CONFIG_PATH;
    use detailing_core_faq_contracts::FaqQuestionError;
    use pretty_assertions::assert_eq;

    use super::*;

    fn events(events: &[&str]) -> Vec<PageEvent> {
        events.iter().map(|s| parse_event(s).unwrap()).collect()
    }

    #[test]
    fn parse() {
        assert_eq!(parse_event("toggle"), Ok(PageEvent::Toggle));
        assert_eq!(
            parse_event("click-outside"),
            Ok(PageEvent::Clicked(ClickTarget::Outside))
        );
        assert_eq!(parse_event("scroll=120.5"), Ok(PageEvent::Scrolled(120.5)));
        assert_eq!(
            parse_event("faq=3"),
            Ok(PageEvent::FaqQuestionClicked(3))
        );
        assert!(parse_event("faq=-1").is_err());
        assert!(parse_event("zoom=2").is_err());
        assert!(parse_event("hover").is_err());
    }

    #[test]
    fn replays_events() {
        // Arrange
        let config = detailing_config::load(&[DEFAULT_CONFIG_PATH]).unwrap();
        let (nav_view, nav_out) = TerminalNavView::buffered();
        let (faq_view, faq_out) = TerminalFaqView::buffered();
        let nav = environment::nav_feature(nav_view);
        let faq = environment::faq_feature(&config, faq_view);

        // Act
        run(
            &nav,
            &faq,
            &config.page.sections,
            &events(&[
                "toggle",
                "click-menu",
                "link",
                "scroll=950",
                "faq=1",
                "faq=4",
                "faq=4",
                "scroll=10",
            ]),
        )
        .unwrap();

        // Assert
        assert_eq!(
            nav_out.lines(),
            [
                "menu open",
                "menu closed",
                "navbar scrolled",
                "section services",
                "navbar top",
                "section home",
            ]
        );
        assert_eq!(
            faq_out.lines(),
            ["faq 1 open", "faq 1 closed", "faq 4 open", "faq 4 closed"]
        );
        assert!(!nav.is_open());
        assert_eq!(faq.open_item(), None);
    }

    #[test]
    fn unknown_faq_item() {
        // Arrange
        let config = detailing_config::load(&[DEFAULT_CONFIG_PATH]).unwrap();
        let nav = environment::nav_feature(TerminalNavView::buffered().0);
        let faq = environment::faq_feature(&config, TerminalFaqView::buffered().0);

        // Act
        let result = run(&nav, &faq, &config.page.sections, &events(&["faq=6"]));

        // Assert
        assert_eq!(
            result.unwrap_err().downcast_ref::<FaqQuestionError>(),
            Some(&FaqQuestionError::UnknownItem { index: 6, count: 6 })
        );
    }
}
