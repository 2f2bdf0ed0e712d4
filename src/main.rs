use AcidDilution::Examples::dilution_examples::{dilution_examples, init_logger};
use log::error;

pub fn main() {
    if let Err(e) = init_logger() {
        eprintln!("logger not initialised: {}", e);
    }
    for task in 0..4 {
        if let Err(e) = dilution_examples(task) {
            error!("example {} failed: {}", task, e);
        }
    }
}
