use std::cell::RefCell;
use std::rc::Rc;

/* ============================================================
 * Subject and observers
 * ============================================================
 */

pub trait Observer {
    fn update(&self, temperature: f64);
}

/// Broadcasts temperature changes to subscribers in subscription order.
/// Unsubscribing compares node identity, so two displays that happen to look
/// alike stay independent.
#[derive(Default)]
pub struct WeatherStation {
    temperature: f64,
    observers: Vec<Rc<dyn Observer>>,
}

impl WeatherStation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_observer(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
    }

    /// No-op when the observer was never subscribed.
    pub fn remove_observer(&mut self, observer: &Rc<dyn Observer>) {
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature;
        self.notify();
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.update(self.temperature);
        }
    }
}

/* ============================================================
 * Concrete displays
 * ============================================================
 */

#[derive(Default)]
pub struct PhoneDisplay {
    received: RefCell<Vec<f64>>,
}

impl PhoneDisplay {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn received(&self) -> Vec<f64> {
        self.received.borrow().clone()
    }
}

impl Observer for PhoneDisplay {
    fn update(&self, temperature: f64) {
        self.received.borrow_mut().push(temperature);
        println!("PhoneDisplay: Temperature updated to {temperature}°C");
    }
}

#[derive(Default)]
pub struct TvDisplay {
    received: RefCell<Vec<f64>>,
}

impl TvDisplay {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn received(&self) -> Vec<f64> {
        self.received.borrow().clone()
    }
}

impl Observer for TvDisplay {
    fn update(&self, temperature: f64) {
        self.received.borrow_mut().push(temperature);
        println!("TVDisplay: Temperature updated to {temperature}°C");
    }
}

fn main() {
    let mut station = WeatherStation::new();
    let phone = PhoneDisplay::new();
    let tv = TvDisplay::new();

    station.add_observer(phone.clone());
    station.add_observer(tv.clone());

    println!("=== Both displays subscribed ===");
    station.set_temperature(21.5);
    station.set_temperature(23.0);

    println!("\n=== Phone unsubscribed ===");
    let phone_handle: Rc<dyn Observer> = phone.clone();
    station.remove_observer(&phone_handle);
    station.set_temperature(25.5);

    println!("\nphone saw {:?}, tv saw {:?}", phone.received(), tv.received());
}
