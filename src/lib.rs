// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Composing of [JUnit XML] reports.
//!
//! Test runs split into shards or parallel jobs produce a JUnit report each.
//! This crate merges such reports into a single one, either:
//! - keeping the original `<testsuite>`s under a new `<testsuites>` root
//!   ([`compose_suites()`]);
//! - or flattening all the `<testcase>`s into a single new `<testsuite>` root
//!   ([`compose_cases()`]).
//!
//! In both cases the new root carries `tests`, `failures` and `errors`
//! counters summed over the input `<testsuite>`s.
//!
//! ```rust
//! use junit_composer::{compose_cases, Source};
//!
//! let report = compose_cases([
//!     Source::inline("1", r#"<testsuite tests="1"><testcase name="a"/></testsuite>"#),
//!     Source::inline("2", r#"<testsuite tests="1"><testcase name="b"/></testsuite>"#),
//! ])
//! .unwrap();
//!
//! assert_eq!(
//!     report,
//!     "<?xml version=\"1.0\" encoding=\"utf-8\" standalone=\"yes\"?>\n\
//!      <testsuite tests=\"2\" failures=\"0\" errors=\"0\">\n  \
//!        <testcase name=\"a\" />\n  \
//!        <testcase name=\"b\" />\n\
//!      </testsuite>",
//! );
//! ```
//!
//! [JUnit XML]: https://llg.cubic.org/docs/junit

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(nonstandard_style, rustdoc::all, trivial_casts, trivial_numeric_casts)]
#![forbid(non_ascii_idents, unsafe_code)]
#![warn(
    clippy::absolute_paths,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::as_conversions,
    clippy::as_pointer_underscore,
    clippy::as_ptr_cast_mut,
    clippy::assertions_on_result_states,
    clippy::branches_sharing_code,
    clippy::cfg_not_test,
    clippy::clear_with_drain,
    clippy::clone_on_ref_ptr,
    clippy::coerce_container_to_any,
    clippy::collection_is_never_read,
    clippy::create_dir,
    clippy::dbg_macro,
    clippy::debug_assert_with_mut_call,
    clippy::decimal_literal_representation,
    clippy::default_union_representation,
    clippy::derive_partial_eq_without_eq,
    clippy::doc_include_without_cfg,
    clippy::empty_drop,
    clippy::empty_structs_with_brackets,
    clippy::equatable_if_let,
    clippy::empty_enum_variants_with_brackets,
    clippy::exit,
    clippy::expect_used,
    clippy::fallible_impl_from,
    clippy::filetype_is_file,
    clippy::float_cmp_const,
    clippy::fn_to_numeric_cast_any,
    clippy::get_unwrap,
    clippy::if_then_some_else_none,
    clippy::imprecise_flops,
    clippy::infinite_loop,
    clippy::iter_on_empty_collections,
    clippy::iter_on_single_items,
    clippy::iter_over_hash_type,
    clippy::iter_with_drain,
    clippy::large_include_file,
    clippy::large_stack_frames,
    clippy::let_underscore_untyped,
    clippy::literal_string_with_formatting_args,
    clippy::lossy_float_literal,
    clippy::map_err_ignore,
    clippy::map_with_unused_argument_over_ranges,
    clippy::mem_forget,
    clippy::missing_assert_message,
    clippy::missing_asserts_for_indexing,
    clippy::missing_const_for_fn,
    clippy::missing_docs_in_private_items,
    clippy::module_name_repetitions,
    clippy::multiple_inherent_impl,
    clippy::multiple_unsafe_ops_per_block,
    clippy::mutex_atomic,
    clippy::mutex_integer,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::needless_raw_strings,
    clippy::non_zero_suggestions,
    clippy::nonstandard_macro_braces,
    clippy::option_if_let_else,
    clippy::or_fun_call,
    clippy::panic_in_result_fn,
    clippy::partial_pub_fields,
    clippy::pathbuf_init_then_push,
    clippy::pedantic,
    clippy::precedence_bits,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::pub_without_shorthand,
    clippy::rc_buffer,
    clippy::rc_mutex,
    clippy::read_zero_byte_vec,
    clippy::redundant_clone,
    clippy::redundant_test_prefix,
    clippy::redundant_type_annotations,
    clippy::renamed_function_params,
    clippy::ref_patterns,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::return_and_then,
    clippy::same_name_method,
    clippy::semicolon_inside_block,
    clippy::set_contains_or_insert,
    clippy::shadow_unrelated,
    clippy::significant_drop_in_scrutinee,
    clippy::significant_drop_tightening,
    clippy::single_option_map,
    clippy::str_to_string,
    clippy::string_add,
    clippy::string_lit_as_bytes,
    clippy::string_lit_chars_any,
    clippy::string_slice,
    clippy::string_to_string,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::suspicious_xor_used_as_pow,
    clippy::tests_outside_test_module,
    clippy::todo,
    clippy::too_long_first_doc_paragraph,
    clippy::trailing_empty_array,
    clippy::transmute_undefined_repr,
    clippy::trivial_regex,
    clippy::try_err,
    clippy::undocumented_unsafe_blocks,
    clippy::unimplemented,
    clippy::uninhabited_references,
    clippy::unnecessary_safety_comment,
    clippy::unnecessary_safety_doc,
    clippy::unnecessary_self_imports,
    clippy::unnecessary_struct_initialization,
    clippy::unused_peekable,
    clippy::unused_result_ok,
    clippy::unused_trait_names,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::use_debug,
    clippy::use_self,
    clippy::useless_let_if_seq,
    clippy::verbose_file_reads,
    clippy::while_float,
    clippy::wildcard_enum_match_arm,
    ambiguous_negative_literals,
    closure_returning_async_block,
    future_incompatible,
    impl_trait_redundant_captures,
    let_underscore_drop,
    macro_use_extern_crate,
    meta_variable_misuse,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    redundant_lifetimes,
    rust_2018_idioms,
    single_use_lifetimes,
    unit_bindings,
    unnameable_types,
    unreachable_pub,
    unstable_features,
    unused,
    variant_size_differences
)]

pub mod build;
pub mod cli;
pub mod discover;
pub mod error;
pub mod extract;
pub mod source;
pub mod totals;
pub mod xml;

#[doc(inline)]
pub use self::{
    build::{build, compose_document, Mode, Scope},
    discover::{discover, expand_targets},
    error::{ComposeError, MalformedReport, Result},
    source::Source,
    totals::Totals,
    xml::{Document, Element},
};

/// Composes the given `targets` into a serialized JUnit report of the given
/// [`Mode`].
///
/// # Errors
///
/// If any of the `targets` can't be read, isn't well-formed XML or isn't a
/// JUnit report. No partial report is produced in such case.
pub fn compose<I>(mode: Mode, targets: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: Into<Source>,
{
    compose_document(mode, targets).map(|doc| doc.to_xml())
}

/// Composes the given `targets` into a `<testsuites>` report containing all
/// their `<testsuite>`s in order.
///
/// # Errors
///
/// See [`compose()`].
pub fn compose_suites<I>(targets: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: Into<Source>,
{
    compose(Mode::Suites, targets)
}

/// Composes the given `targets` into a single `<testsuite>` report containing
/// all their `<testcase>`s in order.
///
/// # Errors
///
/// See [`compose()`].
pub fn compose_cases<I>(targets: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: Into<Source>,
{
    compose(Mode::Cases, targets)
}
