use colored::Colorize;

// =============================================================================
// The real resource: expensive to load, cheap to display once loaded
// =============================================================================

#[derive(Debug)]
pub struct RealImage {
    filename: String,
}

impl RealImage {
    /// Simulates the disk load; the returned line is what the load printed.
    pub fn load(filename: &str) -> (Self, String) {
        let line = format!("Loading image from disk: {filename}");
        (
            Self {
                filename: filename.to_string(),
            },
            line,
        )
    }

    pub fn display(&self) -> String {
        format!("Displaying image: {}", self.filename)
    }
}

// =============================================================================
// The stand-in: gates access and defers the load until first real use
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayOutcome {
    Displayed { lines: Vec<String> },
    Denied { message: String },
}

pub struct ImageProxy {
    filename: String,
    access_granted: bool,
    real: Option<RealImage>,
    loads: u32,
}

impl ImageProxy {
    pub fn new(filename: impl Into<String>, access_granted: bool) -> Self {
        Self {
            filename: filename.into(),
            access_granted,
            real: None,
            loads: 0,
        }
    }

    /// Denial is an ordinary outcome, not an error. A denied proxy never
    /// loads the real image; a granted one loads it on the first call only.
    pub fn display(&mut self) -> DisplayOutcome {
        if !self.access_granted {
            return DisplayOutcome::Denied {
                message: format!("Access denied to display the image: {}", self.filename),
            };
        }

        let mut lines = Vec::new();
        if self.real.is_none() {
            let (image, load_line) = RealImage::load(&self.filename);
            lines.push(load_line);
            self.loads += 1;
            self.real = Some(image);
        }
        if let Some(real) = &self.real {
            lines.push(real.display());
        }
        DisplayOutcome::Displayed { lines }
    }

    pub fn is_materialized(&self) -> bool {
        self.real.is_some()
    }

    pub fn load_count(&self) -> u32 {
        self.loads
    }
}

fn print_outcome(outcome: &DisplayOutcome) {
    match outcome {
        DisplayOutcome::Displayed { lines } => {
            for line in lines {
                println!("{}", line.green());
            }
        }
        DisplayOutcome::Denied { message } => println!("{}", message.red()),
    }
}

fn main() {
    println!("=== Granted proxy: loads once, then reuses ===");
    let mut photo = ImageProxy::new("holiday.png", true);
    print_outcome(&photo.display());
    print_outcome(&photo.display());
    println!("loads so far: {}", photo.load_count());

    println!("\n=== Denied proxy: never loads ===");
    let mut secret = ImageProxy::new("classified.png", false);
    print_outcome(&secret.display());
    print_outcome(&secret.display());
    println!(
        "materialized: {}, loads: {}",
        secret.is_materialized(),
        secret.load_count()
    );
}
