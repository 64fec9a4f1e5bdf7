//! Constructors for the front end's recurring reports.
//!
//! Each helper builds a fully-labeled [`Diagnostic`]; the caller decides
//! where it goes. Keeping the wording here keeps messages consistent across
//! passes.

use rill_ir::Span;

use crate::{Diagnostic, ErrorCode};

/// An operand that should have folded to an integer constant did not.
pub fn expected_integer(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2002)
        .with_message("expected an integer value")
        .with_label(span, "this is not an integer constant")
}

/// An operand that should have folded to a boolean literal did not.
pub fn expected_boolean(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2003)
        .with_message("expected a boolean value")
        .with_label(span, "this is not a boolean constant")
}

/// Fixed-width operands disagree on width or signedness.
pub fn width_mismatch(span: Span, left: &str, right: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2001)
        .with_message(format!("operands have different types: {left} and {right}"))
        .with_label(span, "width and signedness must match exactly")
}

/// The operation is only defined on `bit<>`/`int<>`/unbounded-int operands.
pub fn integer_operands_required(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2005)
        .with_message("operation can only be applied to bit<>, int<>, or int values")
        .with_label(span, "operand has a non-integer type")
}

/// Bitwise complement of a value whose width is not fixed.
pub fn explicit_width_required(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2004)
        .with_message("operation cannot be applied to values with unknown width")
        .with_label(span, "specify the width explicitly")
}

/// Equality test mixing boolean and non-boolean operands.
pub fn boolean_operands_required(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2006)
        .with_message("both operands must be boolean")
        .with_label(span, "in this comparison")
}

/// Concatenation of operands without fixed widths.
pub fn concat_widths_unknown(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2007)
        .with_message("both operand widths must be known")
        .with_label(span, "in this concatenation")
}

/// An expression required to be a compile-time constant is not.
pub fn not_constant(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2008)
        .with_message("expression must evaluate to a compile-time constant")
        .with_label(span, "not a constant")
}

/// A keyset expression of an unsupported form.
pub fn unexpected_keyset(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2009)
        .with_message("unexpected expression in a keyset")
        .with_label(span, "expected a constant, range, mask, or default")
}

/// A constant declaration's initializer did not fold.
pub fn cannot_evaluate_initializer(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2010)
        .with_message("cannot evaluate initializer for constant")
        .with_label(span, "not a compile-time constant")
}

/// Division by zero in a constant expression.
pub fn division_by_zero(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E4001)
        .with_message("division by zero")
        .with_label(span, "in this expression")
}

/// Modulo by zero in a constant expression.
pub fn modulo_by_zero(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E4002)
        .with_message("modulo by zero")
        .with_label(span, "in this expression")
}

/// Division involving a negative operand.
pub fn negative_division(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E4003)
        .with_message("division is not defined for negative numbers")
        .with_label(span, "in this expression")
}

/// Modulo involving a negative operand.
pub fn negative_modulo(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E4004)
        .with_message("modulo is not defined for negative numbers")
        .with_label(span, "in this expression")
}

/// Shift by a negative amount.
pub fn negative_shift(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E4005)
        .with_message("shifts with negative amounts are not permitted")
        .with_label(span, "in this expression")
}

/// Slice index negative or beyond the configured maximum width.
pub fn slice_out_of_range(span: Span, max_width: u32) -> Diagnostic {
    Diagnostic::error(ErrorCode::E4006)
        .with_message(format!("compiler only supports widths up to {max_width}"))
        .with_label(span, "slice index out of range")
}

/// Slice written with its bounds reversed.
pub fn slice_bounds_reversed(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E4007)
        .with_message("bit slices must be specified as [msb:lsb]")
        .with_label(span, "msb is smaller than lsb")
}

/// Shift amount too large to represent.
pub fn shift_amount_out_of_range(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E4008)
        .with_message("shift amount is outside the supported range")
        .with_label(span, "in this expression")
}

/// Shifting a fixed-width value by at least its full width.
pub fn shift_exceeds_width(span: Span, width: u32, amount: u32) -> Diagnostic {
    Diagnostic::warning(ErrorCode::W4001)
        .with_message(format!("shifting {width}-bit value with {amount}"))
        .with_label(span, "the result discards every bit of the operand")
}

/// A select case that no selector value can reach.
pub fn unreachable_case(span: Span) -> Diagnostic {
    Diagnostic::warning(ErrorCode::W4002)
        .with_message("unreachable case")
        .with_label(span, "an earlier case always matches first")
}

/// A select whose constant selector matches none of its cases.
pub fn no_case_matches(span: Span) -> Diagnostic {
    Diagnostic::warning(ErrorCode::W4003)
        .with_message("no case matches")
        .with_label(span, "selector value matches none of these cases")
}
