use super::{generate, Runtime};
use crate::lang::{lex, parse, Error};

type Result<T> = std::result::Result<T, Error>;

/// Stack capacity used when the caller has no opinion.
pub const DEFAULT_STACK_SIZE: usize = 1000;

/// Compile a Tiny-C source string into a ready-to-run [`Runtime`].
///
/// ```
/// use tinyc::mach;
/// let mut runtime = mach::compile("a = 1 + 2;", mach::DEFAULT_STACK_SIZE)?;
/// runtime.run()?;
/// assert_eq!(Some(3), runtime.variables().get(0));
/// # Ok::<(), tinyc::lang::Error>(())
/// ```
pub fn compile(source: &str, stack_size: usize) -> Result<Runtime> {
    let tokens = lex(source);
    let (mut tree, root) = parse(&tokens)?;
    let code = generate(&mut tree, root)?;
    Ok(Runtime::new(tree, code, stack_size))
}
