macro_rules! nutype_string {
    ($ident:ident ( $($args:tt)* )) => {
        #[::nutype::nutype(
            derive(
                Debug,
                Clone,
                PartialEq,
                Eq,
                Deref,
                TryFrom,
                AsRef
            ),
            $($args)*
        )]
        pub struct $ident(String);
    };
}

pub(crate) use nutype_string;
