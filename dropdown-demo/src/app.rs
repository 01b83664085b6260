//! The demo's event loop.
//!
//! The app owns each select's [`Selection`]; selects only report changes
//! through their callback, and the loop feeds the stored value back in as
//! the `value` prop before the next render.

use std::cell::RefCell;
use std::rc::Rc;
use std::slice;
use std::time::Duration;

use dropdown::{default_stylesheet, Select, Selection};
use termdom::{
    Color, Element, Event, EventKind, FocusState, HandlerRegistry, HoverEvent, HoverState, Key,
    ListenerRegistry, Modifiers, Size, Style, Stylesheet, Terminal,
};

use crate::config::DemoConfig;
use crate::error::AppError;

const SELECT_WIDTH: u16 = 40;
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// A titled select and the selection it edits.
struct Field {
    title: String,
    value: Rc<RefCell<Selection>>,
    select: Select,
}

impl Field {
    fn new(id: &str, title: &str, config: &DemoConfig, initial: Selection) -> Self {
        let value = Rc::new(RefCell::new(initial.clone()));
        let sink = Rc::clone(&value);
        let select = Select::new(id, config.select_options(), initial, move |next| {
            *sink.borrow_mut() = next;
        })
        .with_placeholder("Select...")
        .width(Size::Fixed(SELECT_WIDTH));

        Self {
            title: title.to_string(),
            value,
            select,
        }
    }

    /// Pass the stored selection back to the select as its `value` prop.
    fn sync(&mut self) {
        let current = self.value.borrow().clone();
        if !current.same_as(self.select.value()) {
            self.select.set_value(current);
        }
    }

    fn summary(&self) -> String {
        let labels = self.value.borrow().labels().join(", ");
        if labels.is_empty() {
            format!("{}: -", self.title)
        } else {
            format!("{}: {}", self.title, labels)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct App {
    terminal: Terminal,
    sheet: Stylesheet,
    handlers: HandlerRegistry,
    listeners: ListenerRegistry,
    focus: FocusState,
    hover: HoverState,
    fields: Vec<Field>,
    root: Element,
}

impl App {
    pub fn new(config: &DemoConfig) -> Result<Self, AppError> {
        let fields = vec![
            Field::new("single", &config.single_title, config, Selection::single()),
            Field::new("multiple", &config.multiple_title, config, Selection::multiple()),
        ];

        Ok(Self {
            terminal: Terminal::new()?,
            sheet: default_stylesheet().extend(app_stylesheet()),
            handlers: HandlerRegistry::new(),
            listeners: ListenerRegistry::new(),
            focus: FocusState::new(),
            hover: HoverState::new(),
            fields,
            root: Element::col(),
        })
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            self.render()?;

            let raw = self.terminal.poll(Some(POLL_INTERVAL))?;
            for raw_event in &raw {
                let events = self.focus.process_events(
                    slice::from_ref(raw_event),
                    &self.root,
                    self.terminal.layout(),
                    &self.sheet,
                );
                for event in events {
                    if self.handle(event) == Flow::Quit {
                        log::info!("quit requested");
                        return Ok(());
                    }
                    self.sync();
                }
                // Later events hit-test against the tree they will see.
                self.render()?;
            }
        }
    }

    fn any_open(&self) -> bool {
        self.fields.iter().any(|f| f.select.is_open())
    }

    fn handle(&mut self, event: Event) -> Flow {
        match event {
            Event::Key { target, key, modifiers } => {
                if is_quit(key, modifiers) && !self.any_open() {
                    return Flow::Quit;
                }
                if let Some(target) = target {
                    let ran = self.listeners.dispatch_key(&target, key, modifiers);
                    log::trace!("key {:?} on {} reached {} listeners", key, target, ran);
                }
            }
            Event::Click {
                target: Some(target), ..
            } => {
                self.handlers.dispatch(&self.root, EventKind::Click, &target);
            }
            Event::Blur { target } => {
                self.handlers.dispatch(&self.root, EventKind::Blur, &target);
            }
            Event::Focus { target } => log::debug!("focus {}", target),
            Event::MouseMove { x, y } => {
                let moves = self
                    .hover
                    .pointer_moved(&self.root, self.terminal.layout(), &self.sheet, x, y);
                for hover in moves {
                    if let HoverEvent::Enter(id) = hover {
                        self.handlers.dispatch(&self.root, EventKind::MouseEnter, &id);
                    }
                }
            }
            Event::Resize { width, height } => log::debug!("resized to {}x{}", width, height),
            Event::Click { target: None, .. } => {}
        }
        Flow::Continue
    }

    fn sync(&mut self) {
        for field in &mut self.fields {
            field.sync();
        }
    }

    fn render(&mut self) -> Result<(), AppError> {
        self.handlers.clear();
        self.root = self.build();
        self.terminal.render(&self.root, &self.sheet)?;

        for field in &mut self.fields {
            field.select.mount(&self.listeners);
        }
        Ok(())
    }

    fn build(&self) -> Element {
        let fields = self.fields.iter().map(|field| {
            Element::col()
                .child(Element::text(field.title.as_str()).class("label"))
                .child(field.select.element(&self.handlers))
        });

        let status = self
            .fields
            .iter()
            .map(Field::summary)
            .collect::<Vec<_>>()
            .join("   ");

        Element::col()
            .id("root")
            .class("screen")
            .width(Size::Fill)
            .height(Size::Fill)
            .gap(1)
            .child(Element::text("Dropdown").class("title"))
            .children(fields)
            .child(Element::text(status).class("status"))
            .child(
                Element::text("Tab focus  Enter/Space open  \u{2191}\u{2193} move  Esc close  q quit")
                    .class("help"),
            )
    }
}

fn is_quit(key: Key, modifiers: Modifiers) -> bool {
    match key {
        Key::Char('q') => !modifiers.ctrl,
        Key::Char('c') => modifiers.ctrl,
        _ => false,
    }
}

fn app_stylesheet() -> Stylesheet {
    Stylesheet::new()
        .rule(".screen", Style::new().background(Color::oklch(0.18, 0.01, 260.0)))
        .rule(".title", Style::new().foreground(Color::oklch(0.7, 0.15, 250.0)).bold())
        .rule(".label", Style::new().foreground(Color::oklch(0.8, 0.02, 260.0)))
        .rule(".status", Style::new().foreground(Color::oklch(0.85, 0.1, 150.0)))
        .rule(".help", Style::new().foreground(Color::oklch(0.55, 0.02, 260.0)).dim())
}
