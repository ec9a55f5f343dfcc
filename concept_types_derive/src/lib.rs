extern crate proc_macro;
use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod indexed;

#[proc_macro_derive(Indexed)]
pub fn indexed_macro_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    indexed::impl_indexed_macro(&ast)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
