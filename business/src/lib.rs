pub mod application {
    pub mod cart {
        pub mod presenter;
    }
    pub mod catalog {
        pub mod load;
        pub mod presenter;
    }
    pub mod order {
        pub mod place;
    }
    pub mod product {
        pub mod presenter;
    }
    pub mod session;
    pub mod user_data {
        pub mod presenter;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod api {
        pub mod model;
    }
    pub mod cart {
        pub mod model;
        pub mod presenter;
        pub mod view;
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod presenter;
        pub mod services;
        pub mod view;
        pub mod use_cases {
            pub mod load;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod place;
        }
    }
    pub mod product {
        pub mod model;
        pub mod presenter;
        pub mod view;
    }
    pub mod shared {
        pub mod events;
        pub mod presenter;
        pub mod value_objects;
    }
    pub mod user_data {
        pub mod model;
        pub mod presenter;
        pub mod view;
    }
}

#[cfg(test)]
mod test_support;
