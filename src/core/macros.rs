/******************************************\
|==========================================|
|     Macro: impl_from_to_primitive      |
|==========================================|
\******************************************/

/// Generates `from_unchecked` and `index` methods for a fieldless `repr(u8)` enum
/// whose discriminants run contiguously from `0` to `NUM - 1`.
///
/// It provides:
/// - `unsafe fn from_unchecked(index: u8) -> Self`: Converts a `u8` to the enum type. Assumes the index is valid.
/// - `const fn index(&self) -> usize`: Converts the enum instance to its underlying `usize` value.
#[macro_export]
macro_rules! impl_from_to_primitive {
    ($enum_name:ident) => {
        impl $enum_name {
            #[doc=concat!("Converts primitive type u8 to ", stringify!($enum_name))]
            /// ## Safety
            /// - This function assumes the inputs are not malformed, so the index has a corresponding enum element with the same discriminator
            #[inline]
            pub const unsafe fn from_unchecked(index: u8) -> Self {
                debug_assert!(index < Self::NUM as u8, "Index out of bounds");
                unsafe { std::mem::transmute(index) }
            }

            #[doc=concat!("Converts ", stringify!($enum_name), " to primitive type usize")]
            #[inline]
            pub const fn index(&self) -> usize {
                *self as usize
            }
        }
    };
}

/******************************************\
|==========================================|
|          Macro: impl_enum_iter           |
|==========================================|
\******************************************/

/// Generates an `iter()` method for an enum that has a `NUM` constant
/// and an `unsafe fn from_unchecked(index: u8) -> Self` method.
/// The `iter()` method returns a `DoubleEndedIterator` over all variants of the enum.
#[macro_export]
macro_rules! impl_enum_iter {
    ($enum_name:ident) => {
        impl $enum_name {
            #[doc=concat!("Returns iterator for all the elements in ", stringify!($enum_name))]
            pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
                (0..Self::NUM as u8).map(|i| unsafe { Self::from_unchecked(i) })
            }
        }
    };
}

/******************************************\
|==========================================|
|             Macro: impl_op               |
|==========================================|
\******************************************/

/// Helper macro to implement a standard binary operator (e.g., `BitAnd`, `BitOr`)
/// for a struct that wraps a single value (e.g., `MyStruct(value)`).
#[macro_export]
macro_rules! impl_op {
    ($struct_name:ident, $op_name:ident, $method_name:ident, $op:tt) => {
        impl std::ops::$op_name for $struct_name {
            type Output = Self;

            fn $method_name(self, rhs: Self) -> Self::Output {
                Self(self.0 $op rhs.0)
            }
        }
    };
}

/******************************************\
|==========================================|
|          Macro: impl_assign_op           |
|==========================================|
\******************************************/

/// Helper macro to implement an assignment operator (e.g., `BitOrAssign`)
/// for a struct. It assumes the corresponding binary operator is already defined.
#[macro_export]
macro_rules! impl_assign_op {
    ($struct_name:ident, $op_name:ident, $method_name:ident, $op:tt) => {
        impl std::ops::$op_name for $struct_name {
            fn $method_name(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    };
}

/******************************************\
|==========================================|
|           Macro: impl_bit_ops            |
|==========================================|
\******************************************/

/// Implements the bitwise operators (`&`, `|`, `^`, `!`) and the
/// assignment forms (`&=`, `|=`, `^=`) for a single-field wrapper struct.
#[macro_export]
macro_rules! impl_bit_ops {
    ($struct_name:ident) => {
        $crate::impl_op!($struct_name, BitAnd, bitand, &);
        $crate::impl_op!($struct_name, BitOr, bitor, |);
        $crate::impl_op!($struct_name, BitXor, bitxor, ^);

        $crate::impl_assign_op!($struct_name, BitAndAssign, bitand_assign, &);
        $crate::impl_assign_op!($struct_name, BitOrAssign, bitor_assign, |);
        $crate::impl_assign_op!($struct_name, BitXorAssign, bitxor_assign, ^);

        impl std::ops::Not for $struct_name {
            type Output = Self;

            fn not(self) -> Self::Output {
                Self(!self.0)
            }
        }
    };
}
