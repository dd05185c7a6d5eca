/// Builds a unit `struct` for a built-in function of one argument, with an associated
/// `eval_static` method and an implementation of [`Builtin`](super::Builtin).
macro_rules! builtin {
    ($(
        $(#[doc = $doc:literal])*
        $upname:ident $name:literal, $desc:literal, |$arg:ident| $body:expr
    );* $(;)?) => {
        $(
            $(#[doc = $doc])*
            #[derive(Debug)]
            pub struct $upname;

            impl $upname {
                pub fn eval_static($arg: f64) -> Result<f64, crate::numerical::error::EvalError> {
                    $body
                }
            }

            impl super::Builtin for $upname {
                fn name(&self) -> &'static str {
                    $name
                }

                fn description(&self) -> &'static str {
                    $desc
                }

                fn eval(&self, arg: f64) -> Result<f64, crate::numerical::error::EvalError> {
                    Self::eval_static(arg)
                }
            }
        )*
    };
}

pub(crate) use builtin;
