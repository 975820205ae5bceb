//! End-to-end interaction scenarios against a composed page

use std::sync::{Arc, Mutex};
use std::time::Duration;
use vivant_core::config::EngineConfig;
use vivant_core::scroll_lock::ScrollLock;
use vivant_motion::marquee::build_marquee;
use vivant_motion::reveal::RevealPhase;
use vivant_page::{Page, SectionId, SiteContent};
use vivant_widgets::contact::{ContactFields, Field, SubmissionPhase};
use vivant_widgets::nav::{NavEntry, NavStyle, Navigation};
use vivant_widgets::submit::{SimulatedSubmitter, SubmitError};

fn three_link_content() -> SiteContent {
    let mut content = SiteContent::lavie();
    content.nav = vec![
        NavEntry::new("Home", "home"),
        NavEntry::new("Menu", "products"),
        NavEntry::new("Contact", "contact"),
    ];
    content
}

#[test]
fn menu_link_closes_menu_and_navigates() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let lock = ScrollLock::with_hook(move |locked| sink.lock().unwrap().push(locked));
    let mut page =
        Page::with_scroll_lock(three_link_content(), EngineConfig::default(), lock).unwrap();

    page.nav_mut().toggle_menu();
    assert!(page.nav().is_menu_open());
    assert!(page.scroll_lock().is_locked());

    let navigation = page.navigate(1).unwrap();
    assert_eq!(navigation, Navigation::ScrollTo("products".to_string()));
    assert!(!page.nav().is_menu_open());
    assert!(!page.scroll_lock().is_locked());

    let target = page.scroll_target(&navigation).unwrap();
    page.on_scroll(target);
    assert_eq!(page.phase(SectionId::Products), RevealPhase::Revealed);

    assert_eq!(*events.lock().unwrap(), vec![true, false]);
}

#[test]
fn every_close_path_restores_scrolling() {
    let mut page = Page::new(three_link_content(), EngineConfig::default()).unwrap();

    let closers: [fn(&mut Page); 3] = [
        |page| {
            page.nav_mut().close_menu();
        },
        |page| {
            page.nav_mut().backdrop_click();
        },
        |page| {
            page.navigate(0);
        },
    ];
    for close in closers {
        page.nav_mut().toggle_menu();
        assert!(page.scroll_lock().is_locked());
        close(&mut page);
        assert!(!page.scroll_lock().is_locked());
    }
}

#[test]
fn reveal_is_one_way() {
    let mut page = Page::new(SiteContent::lavie(), EngineConfig::default()).unwrap();
    let about = page.section_bounds(SectionId::About).unwrap();

    page.on_scroll(about.y);
    assert_eq!(page.phase(SectionId::About), RevealPhase::Revealed);

    for offset in [0.0, 5000.0, 0.0, about.y] {
        page.on_scroll(offset);
        assert_eq!(page.phase(SectionId::About), RevealPhase::Revealed);
    }
}

#[test]
fn scrolling_to_the_bottom_reveals_everything() {
    let mut page = Page::new(SiteContent::lavie(), EngineConfig::default()).unwrap();
    let step = page.viewport().height / 2.0;
    let mut offset = 0.0;
    while offset < page.document_height() {
        page.on_scroll(offset);
        offset += step;
    }
    assert_eq!(page.pending_sections(), 0);
    for id in SectionId::ALL {
        assert_eq!(page.phase(id), RevealPhase::Revealed, "{id}");
    }
}

#[test]
fn marquee_doubles_input() {
    assert_eq!(
        build_marquee(&["A", "B", "C"]),
        vec!["A", "B", "C", "A", "B", "C"]
    );
}

#[tokio::test(start_paused = true)]
async fn submission_with_missing_email_errors_and_keeps_fields() {
    let page = Page::new(SiteContent::lavie(), EngineConfig::default()).unwrap();
    let form = page.form();
    form.set_field(Field::Name, "Aisha");
    form.set_field(Field::Email, "");
    form.set_field(Field::Message, "hi");
    let before = form.fields();

    let submitter = SimulatedSubmitter::from_config(page.config());
    let phase = page.submit_contact(&submitter).await;

    assert_eq!(phase, Some(SubmissionPhase::Error));
    assert_eq!(form.fields(), before);
    assert_eq!(
        form.last_error(),
        Some(SubmitError::Validation {
            missing: vec![Field::Email]
        })
    );
}

#[tokio::test(start_paused = true)]
async fn complete_submission_succeeds_and_resets_fields() {
    let page = Page::new(SiteContent::lavie(), EngineConfig::default()).unwrap();
    let form = page.form();
    form.set_field(Field::Name, "Aisha");
    form.set_field(Field::Email, "a@b.com");
    form.set_field(Field::Message, "hi");

    let submitter = SimulatedSubmitter::new(Duration::from_millis(1500));
    let pending = page.submit_contact(&submitter);
    let phase = pending.await;

    assert_eq!(phase, Some(SubmissionPhase::Success));
    assert_eq!(form.fields(), ContactFields::default());
    assert_eq!(form.fields().name, "");

    assert!(form.send_another());
    assert_eq!(form.phase(), SubmissionPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn scrolling_continues_while_submission_is_in_flight() {
    let mut page = Page::new(SiteContent::lavie(), EngineConfig::default()).unwrap();
    let form = page.form().clone();
    form.set_field(Field::Name, "Aisha");
    form.set_field(Field::Email, "a@b.com");
    form.set_field(Field::Message, "hi");

    let ticket = form.begin_submit().unwrap();
    let submitter = SimulatedSubmitter::default();
    let request = tokio::spawn(async move {
        use vivant_widgets::submit::Submitter;
        let outcome = submitter.submit(ticket.fields()).await;
        (ticket, outcome)
    });

    // The page stays interactive during the simulated delay
    page.on_scroll(300.0);
    assert_eq!(page.nav().style(), NavStyle::Solid);
    assert_eq!(form.phase(), SubmissionPhase::Submitting);
    assert!(form.begin_submit().is_none());

    let (ticket, outcome) = request.await.unwrap();
    assert!(outcome.is_ok());
    assert_eq!(form.settle(&ticket, outcome), Some(SubmissionPhase::Success));
}
