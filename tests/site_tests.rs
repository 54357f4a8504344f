// Host-side tests for routing, page markup, the nav menu and the contact form.

mod common;

use common::RecordingSink;
use portfolio_web::core::{BackgroundConfig, Intensity, SoundEffect, Variant};
use portfolio_web::site::contact::{SUBMIT_DELAY_MS, SUCCESS_MESSAGE_MS};
use portfolio_web::site::markup::{self, escape_html, render_nav, render_page};
use portfolio_web::site::{
    find_project, menu_links, ContactForm, FormField, FormPhase, KeyCommand, NavMenu, Route,
    PROJECTS,
};

#[test]
fn parses_known_paths() {
    assert_eq!(Route::parse("/"), Route::Home);
    assert_eq!(Route::parse(""), Route::Home);
    assert_eq!(Route::parse("/about/"), Route::About);
    assert_eq!(Route::parse("/services?ref=x"), Route::Services);
    assert_eq!(Route::parse("/portfolio#top"), Route::Portfolio);
    assert_eq!(Route::parse("/portfolio/cognxto"), Route::Project("cognxto".into()));
    assert_eq!(Route::parse("/contact"), Route::Contact);
    assert_eq!(Route::parse("/portfolio/a/b"), Route::NotFound);
    assert_eq!(Route::parse("/blog"), Route::NotFound);
}

#[test]
fn paths_round_trip_through_parse() {
    let routes = [
        Route::Home,
        Route::About,
        Route::Services,
        Route::Portfolio,
        Route::Project("musextreme".into()),
        Route::Contact,
    ];
    for r in routes {
        assert_eq!(Route::parse(&r.path()), r);
    }
}

#[test]
fn pages_pick_their_backgrounds() {
    assert_eq!(
        Route::Home.background(),
        BackgroundConfig::new(Variant::Purple, Intensity::Medium)
    );
    assert_eq!(
        Route::Contact.background(),
        BackgroundConfig::new(Variant::Space, Intensity::Low)
    );
    assert_eq!(
        Route::Project("test".into()).background(),
        BackgroundConfig::new(Variant::Dark, Intensity::Low)
    );
    assert!(Route::Home.has_particle_field());
    assert!(!Route::About.has_particle_field());
    assert!(Route::Portfolio.has_audio_toggle());
    assert!(!Route::Home.has_audio_toggle());
}

#[test]
fn unknown_project_renders_not_found_without_echoing_id() {
    let html = render_page(&Route::Project("<script>nope</script>".into()));
    assert!(html.contains("Project not found"));
    assert!(!html.contains("nope"));
    assert!(html.contains(r#"data-route="/portfolio""#));
}

#[test]
fn known_project_renders_details() {
    let project = find_project("cognxto").map(|p| p.title);
    assert_eq!(project, Some("Cognxto"));
    let html = render_page(&Route::Project("cognxto".into()));
    assert!(html.contains("<h1>Cognxto</h1>"));
    assert!(html.contains("TensorFlow"));
    assert!(html.contains("The Challenge"));
    assert_eq!(html.matches("gallery-item").count(), 3);
    assert!(!html.contains("Project not found"));
}

#[test]
fn portfolio_lists_every_project() {
    let html = render_page(&Route::Portfolio);
    for p in PROJECTS {
        assert!(html.contains(&format!(r#"data-route="/portfolio/{}""#, p.id)));
    }
    assert!(html.contains(markup::AUDIO_TOGGLE_ID));
}

#[test]
fn background_canvas_carries_its_config() {
    let home = render_page(&Route::Home);
    assert!(home.contains(r#"id="bg-canvas""#));
    assert!(home.contains(r#"data-variant="purple""#));
    assert!(home.contains(r#"data-intensity="medium""#));
    assert!(home.contains(markup::PARTICLE_CANVAS_ID));

    let about = render_page(&Route::About);
    assert!(about.contains(r#"data-variant="dark""#));
    assert!(!about.contains(markup::PARTICLE_CANVAS_ID));
}

#[test]
fn backdrop_canvases_screen_blend_over_the_gradient() {
    let style = format!(r#"style="{}""#, markup::BACKDROP_CANVAS_STYLE);
    assert!(markup::BACKDROP_CANVAS_STYLE.contains("mix-blend-mode: screen"));

    let home = render_page(&Route::Home);
    assert_eq!(home.matches("<canvas").count(), 2);
    assert_eq!(home.matches(style.as_str()).count(), 2);

    for route in [Route::About, Route::Services, Route::Contact] {
        let html = render_page(&route);
        assert_eq!(html.matches("<canvas").count(), 1);
        assert!(html.contains(style.as_str()));
    }
}

#[test]
fn links_declare_sound_feedback() {
    let html = render_page(&Route::Services);
    let links = html.matches("data-route=").count();
    assert!(links > 0);
    assert_eq!(html.matches(r#"data-sound-click="navigate""#).count(), links);
    assert!(html.matches(r#"data-sound-hover="hover""#).count() >= links);
}

#[test]
fn contact_page_has_form_fields() {
    let html = render_page(&Route::Contact);
    assert!(html.contains(markup::CONTACT_FORM_ID));
    for field in FormField::ALL {
        assert!(html.contains(&format!(r#"name="{}""#, field.name())));
    }
    assert!(html.contains("contact@benedictus.com"));
}

#[test]
fn text_is_escaped() {
    assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    assert!(render_page(&Route::About).contains("I&#39;m"));
}

#[test]
fn nav_menu_sounds() {
    let sink = RecordingSink::default();
    let mut menu = NavMenu::default();
    assert!(menu.toggle(&sink));
    assert!(!menu.toggle(&sink));
    assert!(menu.toggle(&sink));
    menu.follow(&sink);
    assert!(!menu.is_open());
    assert!(!menu.close());
    assert_eq!(
        *sink.0.borrow(),
        vec![
            SoundEffect::Activate,
            SoundEffect::Click,
            SoundEffect::Activate,
            SoundEffect::Navigate
        ]
    );
}

#[test]
fn close_reports_whether_it_was_open() {
    let sink = RecordingSink::default();
    let mut menu = NavMenu::default();
    menu.toggle(&sink);
    assert!(menu.close());
    assert!(!menu.is_open());
    assert_eq!(sink.0.borrow().len(), 1);
}

#[test]
fn nav_markup_follows_menu_state() {
    let sink = RecordingSink::default();
    let mut menu = NavMenu::default();
    let closed = render_nav(&menu);
    assert!(closed.contains(markup::NAV_TOGGLE_ID));
    assert!(!closed.contains(markup::MENU_CANVAS_ID));

    menu.toggle(&sink);
    let open = render_nav(&menu);
    assert!(open.contains(markup::MENU_CANVAS_ID));
    assert!(open.contains(r#"data-route="/portfolio/test""#));
}

#[test]
fn menu_lists_projects_under_portfolio() {
    let links = menu_links();
    let labels: Vec<_> = links.iter().map(|l| l.label).collect();
    assert_eq!(labels, ["Home", "About", "Portfolio", "Services", "Contact"]);
    let portfolio = &links[2];
    assert_eq!(portfolio.children.len(), PROJECTS.len());
}

#[test]
fn keyboard_shortcuts() {
    assert_eq!(KeyCommand::from_key("m"), Some(KeyCommand::ToggleMute));
    assert_eq!(KeyCommand::from_key("M"), Some(KeyCommand::ToggleMute));
    assert_eq!(KeyCommand::from_key("Escape"), Some(KeyCommand::CloseMenu));
    assert_eq!(KeyCommand::from_key("x"), None);
}

#[test]
fn contact_form_phases() {
    let mut form = ContactForm::new();
    form.set_field(FormField::Email, "a@b.c");
    assert_eq!(form.data.get(FormField::Email), "a@b.c");

    assert!(form.submit(1000.0));
    assert!(!form.submit(1001.0));
    assert_eq!(markup::submit_label(form.phase()), "Sending...");

    assert!(!form.tick(1000.0 + SUBMIT_DELAY_MS - 1.0));
    assert!(form.tick(1000.0 + SUBMIT_DELAY_MS));
    assert!(matches!(form.phase(), FormPhase::Submitted { .. }));
    assert_eq!(form.data.get(FormField::Email), "");
    assert_eq!(markup::status_message(form.phase()), "Message sent successfully!");

    let shown_at = 1000.0 + SUBMIT_DELAY_MS;
    assert!(!form.tick(shown_at + SUCCESS_MESSAGE_MS - 1.0));
    assert!(form.tick(shown_at + SUCCESS_MESSAGE_MS));
    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(FormField::from_name("subject"), Some(FormField::Subject));
    assert_eq!(FormField::from_name("phone"), None);
}
