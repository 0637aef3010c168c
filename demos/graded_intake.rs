use runbag_rs::{bubble_sort_by_key, RunLengthBag};

/// A harvested item that is either sound or spoiled.
#[derive(Debug, Clone, Copy)]
struct Bean {
    sound: bool,
}

impl Bean {
    fn keep(&self) -> bool {
        self.sound
    }
}

/// A bean with size information, forwarding the keep decision to the
/// wrapped bean.
#[derive(Debug, Clone, Copy)]
struct GradedBean {
    bean: Bean,
    size: u32,
}

impl GradedBean {
    fn new(sound: bool, size: u32) -> Self {
        Self {
            bean: Bean { sound },
            size,
        }
    }

    fn keep(&self) -> bool {
        self.bean.keep()
    }

    fn size(&self) -> u32 {
        self.size
    }
}

/// Example program composing the bag with filtering and sorting.
///
/// Usage: cargo run --example graded_intake
fn main() {
    // Intake arrives in bursts of alike items, so the bag stores it
    // compactly. Grading cares about soundness and size only.
    let intake = [
        GradedBean::new(true, 3),
        GradedBean::new(true, 3),
        GradedBean::new(false, 2),
        GradedBean::new(false, 2),
        GradedBean::new(true, 1),
        GradedBean::new(true, 1),
        GradedBean::new(true, 1),
    ];

    let mut bag = RunLengthBag::with_eq(|a: &GradedBean, b: &GradedBean| {
        a.keep() == b.keep() && a.size() == b.size()
    });
    bag.extend(intake);

    let stats = bag.stats();
    println!(
        "Stored {} items in {} runs ({:.0}% of the input)",
        stats.input_length,
        stats.num_runs,
        stats.compression_ratio()
    );

    // Rebuild, drop the spoiled items, sort the rest by size
    let mut kept: Vec<GradedBean> = bag.iter().filter(|b| b.keep()).copied().collect();
    bubble_sort_by_key(&mut kept, |b| b.size());

    println!(
        "Discarded: {}, kept: {}",
        intake.len() - kept.len(),
        kept.len()
    );
    for bean in &kept {
        println!("Size: {}", bean.size());
    }
}
