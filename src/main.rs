//! Seesaw Sim entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlElement, MouseEvent};

    use glam::Vec2;
    use seesaw_sim::hud::object_label;
    use seesaw_sim::platform::{LocalStorage, clock_seed};
    use seesaw_sim::persistence::{KeyValueStore, MemoryStore, StoreError};
    use seesaw_sim::sim::{ClientRect, Frame};
    use seesaw_sim::{ClickOutcome, Seesaw, SeesawConfig};

    /// LocalStorage when available, otherwise an in-memory fallback
    enum Storage {
        Local(LocalStorage),
        Memory(MemoryStore),
    }

    impl KeyValueStore for Storage {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            match self {
                Storage::Local(s) => s.get(key),
                Storage::Memory(s) => s.get(key),
            }
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            match self {
                Storage::Local(s) => s.set(key, value),
                Storage::Memory(s) => s.set(key, value),
            }
        }

        fn remove(&mut self, key: &str) -> Result<(), StoreError> {
            match self {
                Storage::Local(s) => s.remove(key),
                Storage::Memory(s) => s.remove(key),
            }
        }
    }

    /// DOM handles for the page
    struct Page {
        document: Document,
        container: HtmlElement,
        plank: HtmlElement,
        angle: Element,
        left_weight: Element,
        right_weight: Element,
        next_weight: Element,
    }

    impl Page {
        fn find(document: Document) -> Option<Self> {
            let html = |id: &str| {
                document
                    .get_element_by_id(id)
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            };
            Some(Self {
                container: html("seesawContainer")?,
                plank: html("seesawPlank")?,
                angle: document.get_element_by_id("angle")?,
                left_weight: document.get_element_by_id("leftWeight")?,
                right_weight: document.get_element_by_id("rightWeight")?,
                next_weight: document.get_element_by_id("nextWeightStat")?,
                document,
            })
        }

        /// Container geometry, shared by click handling and layout
        fn rect(&self) -> ClientRect {
            let rect = self.container.get_bounding_client_rect();
            ClientRect::new(
                rect.left() as f32,
                rect.top() as f32,
                rect.width() as f32,
                rect.height() as f32,
            )
        }
    }

    /// App instance holding all state
    struct App {
        seesaw: Seesaw<Storage>,
        page: Page,
        /// One element per placed object, same order as the model
        elements: Vec<HtmlElement>,
    }

    impl App {
        fn create_object_element(&self, weight: u32) -> Option<HtmlElement> {
            let el: HtmlElement = self.page.document.create_element("div").ok()?.dyn_into().ok()?;
            el.set_class_name("object");
            el.set_text_content(Some(&object_label(weight)));
            self.page.container.append_child(&el).ok()?;
            Some(el)
        }

        /// Bring the element list in line with the frame, then position everything
        fn render(&mut self, frame: &Frame) {
            while self.elements.len() > frame.objects.len() {
                if let Some(el) = self.elements.pop() {
                    el.remove();
                }
            }
            for view in &frame.objects[self.elements.len()..] {
                match self.create_object_element(view.weight) {
                    Some(el) => self.elements.push(el),
                    None => {
                        log::error!("Failed to create object element");
                        return;
                    }
                }
            }

            let rotate = format!("rotate({}deg)", frame.angle);
            let _ = self.page.plank.style().set_property(
                "transform",
                &format!("translateX(-50%) translateY(-50%) {rotate}"),
            );

            for (el, view) in self.elements.iter().zip(&frame.objects) {
                let corner = view.top_left();
                let style = el.style();
                let _ = style.set_property("width", &format!("{}px", view.size));
                let _ = style.set_property("height", &format!("{}px", view.size));
                let _ = style.set_property("left", &format!("{}px", corner.x));
                let _ = style.set_property("top", &format!("{}px", corner.y));
                let _ = style.set_property("transform", &rotate);
            }
        }

        fn update_hud(&self, frame: &Frame) {
            let hud = self.seesaw.hud(frame);
            self.page.angle.set_text_content(Some(&hud.angle));
            self.page.left_weight.set_text_content(Some(&hud.left_weight));
            self.page.right_weight.set_text_content(Some(&hud.right_weight));
            self.page.next_weight.set_text_content(Some(&hud.next_weight));
        }

        fn frame(&mut self) {
            let frame = self.seesaw.tick(&self.page.rect().surface);
            self.render(&frame);
            self.update_hud(&frame);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Seesaw starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document, cannot start");
            return;
        };
        let Some(page) = Page::find(document) else {
            log::error!("Seesaw page elements missing");
            return;
        };

        let storage = match LocalStorage::open() {
            Some(local) => Storage::Local(local),
            None => {
                log::warn!("LocalStorage unavailable, progress will not be kept");
                Storage::Memory(MemoryStore::new())
            }
        };
        let config = SeesawConfig::load_from(&storage);
        let seed = clock_seed();
        let seesaw = match Seesaw::new(config, storage, seed) {
            Ok(seesaw) => seesaw,
            Err(e) => {
                log::error!("Invalid seesaw config: {e}");
                return;
            }
        };
        log::info!(
            "Seesaw ready with {} objects (seed {seed})",
            seesaw.state().objects().len()
        );

        let app = Rc::new(RefCell::new(App {
            seesaw,
            page,
            elements: Vec::new(),
        }));

        setup_click_handler(app.clone());
        setup_reset_button(app.clone());

        request_animation_frame(app);
    }

    fn setup_click_handler(app: Rc<RefCell<App>>) {
        let container = app.borrow().page.container.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let mut a = app.borrow_mut();
            let rect = a.page.rect();
            let point = rect.to_local(Vec2::new(event.client_x() as f32, event.client_y() as f32));
            if let ClickOutcome::Placed { weight, distance, .. } =
                a.seesaw.handle_click(point, &rect.surface)
            {
                log::info!("Placed {weight}kg at {distance:.0}px");
            }
        });
        let _ = container.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_reset_button(app: Rc<RefCell<App>>) {
        let Some(btn) = app.borrow().page.document.get_element_by_id("resetButton") else {
            log::warn!("No reset button on page");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let mut a = app.borrow_mut();
            a.seesaw.reset();
            for el in a.elements.drain(..) {
                el.remove();
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Seesaw (native) starting...");
    log::info!("Native mode runs a headless demo - build for wasm32 for the web version");

    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drop a few weights on a level plank and print each frame's stats
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use glam::Vec2;
    use seesaw_sim::platform::clock_seed;
    use seesaw_sim::sim::Surface;
    use seesaw_sim::{ClickOutcome, MemoryStore, Seesaw, SeesawConfig};

    let surface = Surface::new(800.0, 400.0);
    let mut seesaw = match Seesaw::new(SeesawConfig::default(), MemoryStore::new(), clock_seed()) {
        Ok(seesaw) => seesaw,
        Err(e) => {
            log::error!("Invalid config: {e}");
            return;
        }
    };

    let clicks = [
        Vec2::new(250.0, 200.0),
        Vec2::new(560.0, 195.0),
        Vec2::new(790.0, 200.0),
        Vec2::new(330.0, 210.0),
    ];
    for click in clicks {
        let weight = seesaw.next_weight();
        match seesaw.handle_click(click, &surface) {
            ClickOutcome::Placed { distance, .. } => {
                println!("placed {weight}kg at {distance:+.1}")
            }
            ClickOutcome::OffPlank { distance } => println!("missed the plank ({distance:+.1})"),
            ClickOutcome::OutsideSurface => println!("click outside surface"),
        }
        let frame = seesaw.tick(&surface);
        let hud = seesaw.hud(&frame);
        println!(
            "  angle {}  left {}  right {}  next {}",
            hud.angle, hud.left_weight, hud.right_weight, hud.next_weight
        );
    }
}
