// =============================================================================
// Vending machine states as one closed enum
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendingState {
    Ready,
    ProductSelected,
    PaymentPending,
    OutOfStock,
}

impl VendingState {
    pub fn handle_request(&self) -> &'static str {
        match self {
            VendingState::Ready => "Ready state: Please select a product.",
            VendingState::ProductSelected => "Product selected state: Processing payment.",
            VendingState::PaymentPending => "Payment pending state: Dispensing product.",
            VendingState::OutOfStock => {
                "Out of stock state: Product unavailable. Please select another product."
            }
        }
    }

    /// The happy-path cycle. An empty machine stays empty until restocked.
    pub fn advance(self) -> VendingState {
        match self {
            VendingState::Ready => VendingState::ProductSelected,
            VendingState::ProductSelected => VendingState::PaymentPending,
            VendingState::PaymentPending => VendingState::Ready,
            VendingState::OutOfStock => VendingState::OutOfStock,
        }
    }
}

// =============================================================================
// Context: behavior follows whatever state is current
// =============================================================================

pub struct VendingMachine {
    state: VendingState,
}

impl VendingMachine {
    pub fn new() -> Self {
        Self {
            state: VendingState::Ready,
        }
    }

    pub fn state(&self) -> VendingState {
        self.state
    }

    pub fn set_state(&mut self, state: VendingState) {
        self.state = state;
    }

    pub fn request(&self) -> &'static str {
        self.state.handle_request()
    }

    pub fn advance(&mut self) {
        self.state = self.state.advance();
    }

    pub fn restock(&mut self) {
        self.state = VendingState::Ready;
    }
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}

fn main() {
    let mut machine = VendingMachine::new();

    println!("=== One full purchase ===");
    for _ in 0..3 {
        println!("{}", machine.request());
        machine.advance();
    }
    println!("back to: {}", machine.request());

    println!("\n=== Sold out ===");
    machine.set_state(VendingState::OutOfStock);
    println!("{}", machine.request());
    machine.advance();
    println!("still: {}", machine.request());
    machine.restock();
    println!("after restock: {}", machine.request());
}
