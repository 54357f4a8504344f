use crate::audio::HtmlAudioBackend;
use crate::constants::{AUDIO_PROMPT_TIMEOUT_MS, CONTACT_POLL_MS};
use crate::core::{
    mount_seed, AppConfig, AudioConfig, AudioSession, CanvasHandle, FrameScheduler, MountedCanvas,
    Scene, Subscription,
};
use crate::dom;
use crate::events;
use crate::frame::RafScheduler;
use crate::input::PointerTracker;
use crate::overlay;
use crate::render::CanvasSurface;
use crate::site::content::OWNER_NAME;
use crate::site::markup::{
    self, APP_ROOT_ID, BG_CANVAS_ID, CONTACT_FORM_ID, CONTACT_STATUS_ID, CONTACT_SUBMIT_ID,
    MENU_CANVAS_ID, PARTICLE_CANVAS_ID,
};
use crate::site::{ContactForm, FormField, FormPhase, NavMenu, Route};
use anyhow::anyhow;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub type Session = AudioSession<HtmlAudioBackend>;
type Mounted = MountedCanvas<Rc<RafScheduler>>;

/// What the current route put on screen. Dropping it tears everything down.
struct Page {
    route: Route,
    canvases: Vec<Mounted>,
    subscriptions: Vec<Subscription>,
}

pub struct App {
    document: web::Document,
    config: AppConfig,
    base_seed: u64,
    mounts: Cell<u64>,
    scheduler: Rc<RafScheduler>,
    pub audio: Rc<Session>,
    page: RefCell<Option<Page>>,
    menu: Cell<NavMenu>,
    menu_canvas: RefCell<Option<Mounted>>,
    contact: RefCell<ContactForm>,
    this: Weak<App>,
}

impl App {
    fn new(document: web::Document, config: AppConfig, audio: Rc<Session>) -> Rc<Self> {
        let base_seed = config.seed.unwrap_or_else(rand::random);
        log::info!("[app] seed={} config={:?}", base_seed, config);
        Rc::new_cyclic(|this| Self {
            document,
            config,
            base_seed,
            mounts: Cell::new(0),
            scheduler: Rc::new(RafScheduler::new()),
            audio,
            page: RefCell::new(None),
            menu: Cell::new(NavMenu::default()),
            menu_canvas: RefCell::new(None),
            contact: RefCell::new(ContactForm::new()),
            this: this.clone(),
        })
    }

    #[inline]
    pub fn document(&self) -> &web::Document {
        &self.document
    }

    fn next_seed(&self) -> u64 {
        let n = self.mounts.get();
        self.mounts.set(n + 1);
        mount_seed(self.base_seed, n)
    }

    /// Mount `scene` on the canvas with `id`, plus its resize (and pointer)
    /// listeners.
    fn mount_canvas(&self, id: &str, scene: Scene) -> anyhow::Result<Mounted> {
        let canvas: web::HtmlCanvasElement = dom::element_by_id(&self.document, id)
            .ok_or_else(|| anyhow!("missing #{}", id))?;
        let surface = CanvasSurface::new(canvas.clone())?;
        let pointer = scene.tracks_pointer().then(PointerTracker::new);
        let (mut mounted, handle): (Mounted, CanvasHandle<CanvasSurface>) = MountedCanvas::mount(
            self.scheduler.clone(),
            surface,
            scene,
            dom::canvas_viewport(&canvas),
            pointer.clone(),
            self.next_seed(),
        );
        if let Some(window) = web::window() {
            let canvas_resize = canvas.clone();
            mounted.attach(dom::listen(&window, "resize", move |_| {
                handle.borrow_mut().resize(dom::canvas_viewport(&canvas_resize));
            }));
            if let Some(tracker) = pointer {
                for sub in events::pointer::track(&window, &canvas, tracker) {
                    mounted.attach(sub);
                }
            }
        }
        Ok(mounted)
    }

    /// Show `route`: tear down the previous page, render markup and mount
    /// the page's canvases.
    pub fn navigate(&self, route: Route, push_history: bool) {
        self.close_menu();
        if let Some(old) = self.page.borrow_mut().take() {
            log::info!("[router] leaving {}", old.route.path());
            drop(old);
        }

        if let Some(root) = self.document.get_element_by_id(APP_ROOT_ID) {
            root.set_inner_html(&markup::render_page(&route));
        }
        self.document
            .set_title(&format!("{} | {}", route.title(), OWNER_NAME));
        if push_history {
            if let Some(history) = web::window().and_then(|w| w.history().ok()) {
                _ = history.push_state_with_url(&JsValue::NULL, "", Some(&route.path()));
            }
        }

        let background = self.config.background_for(route.background());
        let mut page = Page {
            route: route.clone(),
            canvases: Vec::with_capacity(2),
            subscriptions: Vec::new(),
        };
        match self.mount_canvas(BG_CANVAS_ID, Scene::Background(background)) {
            Ok(m) => page.canvases.push(m),
            Err(e) => log::error!("[canvas] background: {:?}", e),
        }
        if route.has_particle_field() {
            match self.mount_canvas(PARTICLE_CANVAS_ID, Scene::ParticleField(background)) {
                Ok(m) => page.canvases.push(m),
                Err(e) => log::error!("[canvas] particles: {:?}", e),
            }
        }
        if route.has_audio_toggle() {
            overlay::sync_audio_toggle(&self.document, self.audio.is_muted());
        }
        if route == Route::Contact {
            *self.contact.borrow_mut() = ContactForm::new();
            page.subscriptions = self.wire_contact_form();
        }
        log::info!(
            "[router] showing {} ({} canvases, {} listeners, {} loops active)",
            route.path(),
            page.canvases.len(),
            page.subscriptions.len(),
            self.scheduler.active_loops()
        );
        *self.page.borrow_mut() = Some(page);
    }

    pub fn current_route(&self) -> Option<Route> {
        self.page.borrow().as_ref().map(|p| p.route.clone())
    }

    pub fn toggle_menu(&self) {
        let mut menu = self.menu.get();
        let open = menu.toggle(&self.audio);
        self.menu.set(menu);
        self.sync_menu(open);
    }

    pub fn close_menu(&self) {
        let mut menu = self.menu.get();
        if menu.close() {
            self.menu.set(menu);
            self.sync_menu(false);
        }
    }

    /// A menu link was followed: close with navigation feedback.
    pub fn follow_menu_link(&self) {
        let mut menu = self.menu.get();
        if menu.is_open() {
            menu.follow(&self.audio);
            self.menu.set(menu);
            self.sync_menu(false);
        }
    }

    #[inline]
    pub fn menu_is_open(&self) -> bool {
        self.menu.get().is_open()
    }

    fn sync_menu(&self, open: bool) {
        // Unmount before the canvas element is replaced
        self.menu_canvas.borrow_mut().take();
        overlay::render_nav(&self.document, &self.menu.get());
        if open {
            match self.mount_canvas(MENU_CANVAS_ID, Scene::MenuShapes) {
                Ok(m) => *self.menu_canvas.borrow_mut() = Some(m),
                Err(e) => log::error!("[canvas] menu shapes: {:?}", e),
            }
        }
    }

    pub fn toggle_mute(&self) {
        self.audio.toggle_mute();
        overlay::sync_audio_toggle(&self.document, self.audio.is_muted());
    }

    fn wire_contact_form(&self) -> Vec<Subscription> {
        let Some(form) = self.document.get_element_by_id(CONTACT_FORM_ID) else {
            return Vec::new();
        };
        let this_input = self.this.clone();
        let input = dom::listen(&form, "input", move |ev| {
            let Some(app) = this_input.upgrade() else {
                return;
            };
            let Some(target) = ev.target() else {
                return;
            };
            let (name, value) = if let Some(el) = target.dyn_ref::<web::HtmlInputElement>() {
                (el.name(), el.value())
            } else if let Some(el) = target.dyn_ref::<web::HtmlTextAreaElement>() {
                (el.name(), el.value())
            } else {
                return;
            };
            if let Some(field) = FormField::from_name(&name) {
                app.contact.borrow_mut().set_field(field, &value);
            }
        });
        let this_submit = self.this.clone();
        let submit = dom::listen(&form, "submit", move |ev| {
            ev.prevent_default();
            let Some(app) = this_submit.upgrade() else {
                return;
            };
            let started = app.contact.borrow_mut().submit(js_sys::Date::now());
            if started {
                log::info!("[contact] submitting");
                app.sync_contact_form();
                app.poll_contact_form();
            }
        });
        vec![input, submit]
    }

    fn poll_contact_form(&self) {
        let this = self.this.clone();
        dom::set_timeout(CONTACT_POLL_MS, move || {
            let Some(app) = this.upgrade() else {
                return;
            };
            let changed = app.contact.borrow_mut().tick(js_sys::Date::now());
            if changed {
                app.sync_contact_form();
            }
            if app.contact.borrow().phase() != FormPhase::Editing {
                app.poll_contact_form();
            }
        });
    }

    fn sync_contact_form(&self) {
        let phase = self.contact.borrow().phase();
        if let Some(button) = self.document.get_element_by_id(CONTACT_SUBMIT_ID) {
            button.set_text_content(Some(markup::submit_label(phase)));
            if matches!(phase, FormPhase::Submitting { .. }) {
                _ = button.set_attribute("disabled", "");
            } else {
                _ = button.remove_attribute("disabled");
            }
        }
        if let Some(status) = self.document.get_element_by_id(CONTACT_STATUS_ID) {
            status.set_text_content(Some(markup::status_message(phase)));
        }
        if matches!(phase, FormPhase::Submitted { .. }) {
            if let Some(form) =
                dom::element_by_id::<web::HtmlFormElement>(&self.document, CONTACT_FORM_ID)
            {
                form.reset();
            }
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    let location = window.location();
    let config = AppConfig::from_query(&location.search().unwrap_or_default());

    let audio_config = AudioConfig::default();
    let backend = HtmlAudioBackend::new(&audio_config)?;
    let audio = AudioSession::new(backend, audio_config, config.start_muted);

    let app = App::new(document.clone(), config, audio);
    events::interaction::wire_audio_unlock(&window, &app);
    events::interaction::wire_delegated(&document, &app);
    events::interaction::wire_popstate(&window, &app);
    events::keyboard::wire_global_keydown(&document, &app);

    overlay::show_prompt(&document);
    let doc_prompt = document.clone();
    dom::set_timeout(AUDIO_PROMPT_TIMEOUT_MS, move || overlay::hide_prompt(&doc_prompt));

    overlay::render_nav(&document, &NavMenu::default());
    let path = location.pathname().unwrap_or_else(|_| "/".into());
    app.navigate(Route::parse(&path), false);

    // Handlers hold weak references; the app lives for the whole session
    std::mem::forget(app);
    Ok(())
}
