macro_rules! generic_vec {
    {
        $docs:meta;
        $name:ident,
        $elem_cnt:literal,
        $($comp:ident => $idx:literal),+
    } => {
        #[$docs]
        #[repr(C)]
        #[derive(Clone, Copy, PartialEq, Default, Debug)]
        pub struct $name {
            $(pub $comp: f64,)+
        }

        impl $name {
            /// Create a new vector
            #[inline(always)]
            #[must_use]
            pub const fn new($($comp: f64),+) -> Self {
                Self{ $($comp),+ }
            }

            /// Create a vector with all components set to `val`
            #[inline(always)]
            #[must_use]
            pub const fn set(val: f64) -> Self {
                Self{ $($comp: val),+ }
            }

            /// Create a vector from an array
            #[inline(always)]
            #[must_use]
            pub const fn from_array(arr: [f64; $elem_cnt]) -> Self {
                Self{ $($comp: arr[$idx]),+ }
            }

            /// Get the content of the vector as an array
            #[inline(always)]
            #[must_use]
            pub const fn to_array(self) -> [f64; $elem_cnt] {
                [$(self.$comp),+]
            }

            /// Check if none of the components are NaN or infinite
            #[inline]
            pub fn is_finite(self) -> bool {
                $(self.$comp.is_finite())&&+
            }
        }

        impl core::ops::Index<usize> for $name {
            type Output = f64;

            #[inline(always)]
            fn index(&self, index: usize) -> &Self::Output {
                match index {
                    $($idx => &self.$comp,)+
                    _ => panic!("index {index} is out of range for {}", stringify!($name)),
                }
            }
        }

        impl core::ops::IndexMut<usize> for $name {
            #[inline(always)]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                match index {
                    $($idx => &mut self.$comp,)+
                    _ => panic!("index {index} is out of range for {}", stringify!($name)),
                }
            }
        }

        impl From<[f64; $elem_cnt]> for $name {
            fn from(arr: [f64; $elem_cnt]) -> Self {
                Self::from_array(arr)
            }
        }

        impl From<$name> for [f64; $elem_cnt] {
            fn from(vec: $name) -> Self {
                vec.to_array()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("(")?;
                for (idx, val) in self.to_array().iter().enumerate() {
                    if idx != 0 {
                        f.write_str(", ")?;
                    }
                    std::fmt::Display::fmt(val, f)?;
                }
                f.write_str(")")
            }
        }
    };
}

mod vec3;
pub use vec3::*;

mod vec4;
pub use vec4::*;
