use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{Ident, ItemFn};

/// Proc macro to denote a Transaction
///
/// A transaction is the unit the runner counts: every call is timed, and an `Ok` counts as a
/// success while an `Err` counts as an error. Only works on `async` functions returning
/// `Result<T, E>`.
///
/// # Example
/// ```ignore
/// use chipload::prelude::*;
///
/// #[transaction]
/// async fn my_transaction(arg_1: u32, arg_2: &str) -> Result<String, MyError> {
///     ...
/// }
/// ```
#[proc_macro_attribute]
pub fn transaction(attr: TokenStream, item: TokenStream) -> TokenStream {
    match transaction_internal(attr, item) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn transaction_internal(_attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream2> {
    let input = syn::parse::<ItemFn>(item)?;

    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = input;

    if sig.asyncness.is_none() {
        return Err(syn::Error::new_spanned(
            sig.fn_token,
            "#[transaction] only works on async functions",
        ));
    }

    let stmts = &block.stmts;
    let name = sig.ident.to_string();
    let success = format!("{name}_success");
    let error = format!("{name}_error");
    let latency = format!("{name}_latency");

    Ok(quote! {
        #(#attrs)* #vis #sig {
            let __chipload_labels = ::chipload::core::TransactionLabels {
                success: #success,
                error: #error,
                latency: #latency,
            };
            ::chipload::transaction::transaction_hook(__chipload_labels, async move {
                #(#stmts)*
            }).await
        }
    })
}

/// Proc macro to denote a Scenario
///
/// NOTE: Only works on `async` functions which take no arguments and have no return value.
///
/// The function keeps its name but now returns a `chipload::Scenario`, which is
/// configured with the `ConfigurableScenario` methods and run by awaiting it. The original body
/// is what every VU calls in a loop.
///
/// # Example
/// ```ignore
/// use chipload::prelude::*;
///
/// #[scenario]
/// async fn my_scenario() {
/// }
/// ```
#[proc_macro_attribute]
pub fn scenario(attr: TokenStream, item: TokenStream) -> TokenStream {
    match scenario_internal(attr, item) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn scenario_internal(_attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream2> {
    let input = syn::parse::<ItemFn>(item)?;

    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = input;

    if sig.asyncness.is_none() || !sig.inputs.is_empty() {
        return Err(syn::Error::new_spanned(
            sig.fn_token,
            "#[scenario] only works on async functions without arguments",
        ));
    }

    let stmts = &block.stmts;

    let new_name = Ident::new(&format!("__chipload_{}", sig.ident), Span::call_site());
    let mut new_sig = sig.clone();
    new_sig.ident = new_name.clone();

    let mut scen_sig = sig.clone();
    let scen_name = sig.ident.clone();
    scen_sig.asyncness = None;
    scen_sig.output = syn::parse_quote! {
        -> impl ::chipload::scenario::ConfigurableScenario<::chipload::core::RunStatistics>
    };

    Ok(quote! {
        #(#attrs)* #vis #scen_sig {
            ::chipload::scenario::Scenario::new(stringify!(#scen_name), #new_name)
        }

        #(#attrs)* #vis #new_sig {
            #(#stmts)*
        }
    })
}
