macro_rules! make_index {
    ($vis:vis $name:ident) => {
        /// Index type.
        #[derive(
            Copy,
            Clone,
            Debug,
            Hash,
            Eq,
            PartialEq,
            Ord,
            PartialOrd,
        )]
        $vis struct $name(u32);

        #[allow(dead_code)]
        impl $name {
            /// Create new index from `usize`.
            #[inline(always)]
            $vis fn new(x: usize) -> Self {
                debug_assert!(x < u32::MAX as usize);
                Self(x as u32)
            }

            /// Returns the index as `usize`.
            #[inline(always)]
            $vis fn index(&self) -> usize { self.0 as usize }

            /// Create the sentinel index. It never refers to a vertex.
            #[inline(always)]
            $vis fn end() -> Self { Self(u32::MAX) }

            /// Returns whether the index refers to a vertex.
            #[inline(always)]
            $vis fn is_valid(&self) -> bool { self.0 != u32::MAX }
        }

        impl ::std::default::Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::end()
            }
        }

        impl ::std::convert::From<usize> for $name {
            #[inline(always)]
            fn from(x: usize) -> Self {
                Self::new(x)
            }
        }

        impl ::std::convert::From<$name> for usize {
            #[inline(always)]
            fn from(x: $name) -> Self {
                x.index()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                if self.is_valid() {
                    write!(f, "{}", self.0)
                } else {
                    f.write_str("-")
                }
            }
        }
    };
}

make_index!(pub(crate) VertexIndex);

#[cfg(test)]
mod test {
    #[test]
    fn make_index() {
        make_index!(TestIndex);

        let idx = TestIndex::new(42);

        assert_eq!(idx.index(), 42);
        assert!(idx.is_valid());
        assert!(!TestIndex::end().is_valid());
        assert_eq!(TestIndex::default(), TestIndex::end());
        assert_eq!(TestIndex::from(42_usize), idx);
        assert_eq!(usize::from(idx), 42_usize);
        assert_eq!(format!("{:?}", idx), "TestIndex(42)".to_string());
        assert_eq!(format!("{}", idx), "42".to_string());
        assert_eq!(format!("{}", TestIndex::end()), "-".to_string());
    }
}
