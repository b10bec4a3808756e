//! 工厂宏实现

use crate::utils::{is_result_type, to_pascal_case};
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::{
    ext::IdentExt, parse::Parse, parse::ParseStream, parse_macro_input, punctuated::Punctuated,
    Error, Expr, FnArg, Ident, ItemFn, Lit, LitStr, Meta, Pat, Result, ReturnType, Token, Type,
};

/// 工厂宏参数
#[derive(Debug, Clone, Default)]
pub struct FactoryArgs {
    /// 自定义生成的工厂类型名称
    pub name: Option<String>,
    /// 强制指定返回值是否为 Result
    pub fallible: Option<bool>,
}

impl Parse for FactoryArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = FactoryArgs::default();

        let parsed = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;

        for meta in parsed {
            match meta {
                Meta::Path(path) if path.is_ident("fallible") => args.fallible = Some(true),
                Meta::Path(path) if path.is_ident("infallible") => args.fallible = Some(false),
                Meta::NameValue(nv) if nv.path.is_ident("name") => match nv.value {
                    Expr::Lit(expr_lit) => match expr_lit.lit {
                        Lit::Str(lit_str) => args.name = Some(lit_str.value()),
                        other => return Err(Error::new_spanned(other, "name 必须是字符串")),
                    },
                    other => return Err(Error::new_spanned(other, "name 必须是字符串")),
                },
                other => {
                    return Err(Error::new_spanned(
                        other,
                        "未知参数, 可用参数: name = \"...\", fallible, infallible",
                    ))
                }
            }
        }

        Ok(args)
    }
}

/// 工厂参数
struct Parameter {
    /// 依赖名称
    name: String,
    /// 参数类型
    ty: Type,
}

/// 实现 #[factory] 宏
pub fn factory_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let factory_args = if args.is_empty() {
        FactoryArgs::default()
    } else {
        match syn::parse::<FactoryArgs>(args) {
            Ok(args) => args,
            Err(e) => return e.to_compile_error().into(),
        }
    };

    let mut input_fn = parse_macro_input!(input as ItemFn);

    match expand(&factory_args, &mut input_fn) {
        Ok(expanded) => expanded.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(args: &FactoryArgs, input_fn: &mut ItemFn) -> Result<proc_macro2::TokenStream> {
    let sig = &input_fn.sig;
    if let Some(asyncness) = &sig.asyncness {
        return Err(Error::new_spanned(asyncness, "#[factory] 不支持异步函数"));
    }
    if !sig.generics.params.is_empty() {
        return Err(Error::new_spanned(&sig.generics, "#[factory] 不支持泛型函数"));
    }

    let parameters = collect_parameters(input_fn)?;

    let fn_name = &input_fn.sig.ident;
    let vis = &input_fn.vis;
    let factory_name = match &args.name {
        Some(name) => Ident::new(name, Span::call_site()),
        None => format_ident!("{}Factory", to_pascal_case(&fn_name.unraw().to_string())),
    };

    let fallible = args.fallible.unwrap_or_else(|| match &input_fn.sig.output {
        ReturnType::Type(_, ty) => is_result_type(ty),
        ReturnType::Default => false,
    });

    let names: Vec<&str> = parameters.iter().map(|p| p.name.as_str()).collect();
    let types: Vec<&Type> = parameters.iter().map(|p| &p.ty).collect();
    let locals: Vec<Ident> = (0..parameters.len())
        .map(|index| format_ident!("__dependency_{}", index))
        .collect();
    let arity = parameters.len();

    let signature = if names.is_empty() {
        quote! { ::di_abstractions::Signature::empty() }
    } else {
        quote! { ::di_abstractions::Signature::new([#(#names),*]) }
    };

    let output = if fallible {
        quote! {
            output
                .map(::di_abstractions::Component::wrap)
                .map_err(::di_abstractions::ComponentError::factory_failed)
        }
    } else {
        quote! { ::std::result::Result::Ok(::di_abstractions::Component::wrap(output)) }
    };

    let doc = format!(" [`{fn_name}`] 的工厂, 依赖: ({})", names.join(", "));

    Ok(quote! {
        #input_fn

        #[doc = #doc]
        #[derive(Debug, Clone, Copy, Default)]
        #vis struct #factory_name;

        impl ::di_abstractions::Factory for #factory_name {
            fn signature(&self) -> ::di_abstractions::Signature {
                #signature
            }

            fn arity(&self) -> usize {
                #arity
            }

            #[allow(unused_mut, unused_variables)]
            fn invoke(
                &self,
                dependencies: ::std::vec::Vec<::di_abstractions::ResolvedDependency>,
            ) -> ::di_abstractions::ComponentResult<::di_abstractions::Component> {
                let mut dependencies = dependencies.into_iter();
                #(
                    let #locals = ::di_abstractions::take_dependency::<#types, _>(&mut dependencies)?;
                )*
                let output = #fn_name(#(#locals),*);
                #output
            }
        }
    })
}

/// 提取参数的依赖名称，并移除参数上的 #[dependency] 属性
fn collect_parameters(input_fn: &mut ItemFn) -> Result<Vec<Parameter>> {
    let mut parameters = Vec::with_capacity(input_fn.sig.inputs.len());

    for input in &mut input_fn.sig.inputs {
        let pat_type = match input {
            FnArg::Typed(pat_type) => pat_type,
            FnArg::Receiver(receiver) => {
                return Err(Error::new_spanned(receiver, "#[factory] 不支持方法"));
            }
        };

        let mut renamed = None;
        let mut kept = Vec::with_capacity(pat_type.attrs.len());
        for attr in pat_type.attrs.drain(..) {
            if attr.path().is_ident("dependency") {
                let lit: LitStr = attr.parse_args()?;
                if lit.value().is_empty() {
                    return Err(Error::new_spanned(lit, "依赖名称不能为空"));
                }
                renamed = Some(lit.value());
            } else {
                kept.push(attr);
            }
        }
        pat_type.attrs = kept;

        let name = match (renamed, pat_type.pat.as_ref()) {
            (Some(name), _) => name,
            (None, Pat::Ident(pat_ident)) => pat_ident.ident.unraw().to_string(),
            (None, other) => {
                return Err(Error::new_spanned(
                    other,
                    "参数必须是标识符, 或用 #[dependency(\"name\")] 指定依赖名称",
                ));
            }
        };

        parameters.push(Parameter {
            name,
            ty: (*pat_type.ty).clone(),
        });
    }

    Ok(parameters)
}
