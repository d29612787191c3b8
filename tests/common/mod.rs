use tinyc::mach::{self, Runtime, State};

/// Compile and run to completion, panicking on any error.
pub fn run(source: &str) -> Runtime {
    let mut runtime = match mach::compile(source, mach::DEFAULT_STACK_SIZE) {
        Ok(runtime) => runtime,
        Err(e) => panic!("{} : {:?}", e, e),
    };
    if let Err(e) = runtime.run() {
        panic!("{} : {:?}", e, e);
    }
    assert_eq!(State::Halted, runtime.state());
    runtime
}

/// Value of a variable by its source name.
pub fn var(runtime: &Runtime, name: char) -> i64 {
    match runtime.variables().get(name as usize - 'a' as usize) {
        Some(value) => value,
        None => panic!("no variable named {}", name),
    }
}
