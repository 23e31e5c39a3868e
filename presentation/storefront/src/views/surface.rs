use std::cell::RefCell;
use std::rc::Rc;

use business::domain::user_data::model::UserField;

/// User gestures a surface can receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    Click,
    AddToCart,
    RemoveFromCart,
    /// Delete button of the rendered row at this position.
    RemoveAt(usize),
    Input { field: UserField, value: String },
    Submit,
}

pub type Listener = Box<dyn Fn(&Gesture)>;

struct SurfaceState {
    name: String,
    content: String,
    listeners: Vec<Listener>,
}

/// Display handle a view renders into, the terminal counterpart of a DOM
/// container. Clones point to the same surface: the view owns rendering, the
/// host only reads the content and injects gestures.
#[derive(Clone)]
pub struct Surface {
    state: Rc<RefCell<SurfaceState>>,
}

impl Surface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state: Rc::new(RefCell::new(SurfaceState {
                name: name.into(),
                content: String::new(),
                listeners: Vec::new(),
            })),
        }
    }

    pub fn name(&self) -> String {
        self.state.borrow().name.clone()
    }

    pub fn content(&self) -> String {
        self.state.borrow().content.clone()
    }

    pub fn set_content(&self, content: String) {
        self.state.borrow_mut().content = content;
    }

    pub fn add_listener(&self, listener: Listener) {
        self.state.borrow_mut().listeners.push(listener);
    }

    /// Delivers `gesture` to every listener, in registration order.
    pub fn dispatch(&self, gesture: &Gesture) {
        let state = self.state.borrow();
        for listener in &state.listeners {
            listener(gesture);
        }
    }
}
