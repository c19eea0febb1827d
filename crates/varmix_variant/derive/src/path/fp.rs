//! Fully qualified paths of `core` items, immune to shadowing at the call site.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_fp {
    ($($name:ident => $($seg:ident)::+;)*) => {$(
        pub(crate) struct $name;

        impl ToTokens for $name {
            #[inline]
            fn to_tokens(&self, tokens: &mut TokenStream) {
                quote!($(::$seg)+).to_tokens(tokens);
            }
        }
    )*};
}

define_fp! {
    DefaultFP => core::default::Default;
    FromFP => core::convert::From;
    IntoFP => core::convert::Into;
    OptionFP => core::option::Option;
    ResultFP => core::result::Result;
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::{IntoFP, OptionFP};

    #[test]
    fn renders_absolute_paths() {
        assert_eq!(
            quote!(#OptionFP::None).to_string(),
            ":: core :: option :: Option :: None"
        );
        assert_eq!(quote!(#IntoFP).to_string(), ":: core :: convert :: Into");
    }
}
