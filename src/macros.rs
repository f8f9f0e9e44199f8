// src/macros.rs
#[macro_export]
macro_rules! s {
    // `s!()` is an empty String
    () => {
        ::std::string::String::new()
    };
    // `s!(x)` is String::from(x): literals, consts, &String
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // Concatenate string slices into a new String
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}
