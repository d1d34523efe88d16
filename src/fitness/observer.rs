// Observer Pattern - the session pushes every new action to its viewers.

use std::io::Write;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::{Error, Result};

pub trait Observer {
    fn update(&self, action: &str, out: &mut dyn Write) -> Result<()>;
    fn name(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct OnlineViewer {
    name: String,
}

impl OnlineViewer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Observer for OnlineViewer {
    fn update(&self, action: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} is now {}.", self.name, action)?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Subject holding viewers in registration order.
///
/// The same viewer may be registered more than once; it is then notified
/// once per registration.
#[derive(Default)]
pub struct FitnessSession {
    observers: Vec<Rc<dyn Observer>>,
    current_action: Option<String>,
}

impl FitnessSession {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            current_action: None,
        }
    }

    pub fn add_observer(&mut self, observer: Rc<dyn Observer>) {
        debug!(observer = observer.name(), "observer registered");
        self.observers.push(observer);
    }

    /// Remove the first registration of `observer`, compared by identity.
    /// Unknown observers are ignored.
    pub fn remove_observer(&mut self, observer: &Rc<dyn Observer>) {
        if let Some(index) = self
            .observers
            .iter()
            .position(|registered| Rc::ptr_eq(registered, observer))
        {
            let removed = self.observers.remove(index);
            debug!(observer = removed.name(), "observer removed");
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn current_action(&self) -> Option<&str> {
        self.current_action.as_deref()
    }

    /// Store `action` and notify every observer before returning.
    ///
    /// A failing observer does not stop the fan-out; the failures are
    /// reported together once every observer has been called.
    pub fn set_action(&mut self, action: impl Into<String>, out: &mut dyn Write) -> Result<()> {
        self.current_action = Some(action.into());
        self.notify_observers(out)
    }

    fn notify_observers(&self, out: &mut dyn Write) -> Result<()> {
        let Some(action) = self.current_action.as_deref() else {
            return Ok(());
        };

        let mut failed = 0;
        for observer in &self.observers {
            if let Err(err) = observer.update(action, out) {
                warn!(observer = observer.name(), error = %err, "observer failed to handle update");
                failed += 1;
            }
        }

        if failed > 0 {
            return Err(Error::Notification {
                failed,
                total: self.observers.len(),
            });
        }
        Ok(())
    }
}
