/// runnable dilution scenarios: strong acid, trace acid, settings file, sweep
pub mod dilution_examples;
