pub mod application {
    pub mod product {
        pub mod classify;
    }
    pub mod suggestion {
        pub mod analyze;
    }
}

pub mod domain {
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod status;
        pub mod value_objects;
        pub mod use_cases {
            pub mod classify;
        }
    }
    pub mod store {
        pub mod model;
    }
    pub mod suggestion {
        pub mod errors;
        pub mod model;
        pub mod prompt;
        pub mod schema;
        pub mod services;
        pub mod use_cases {
            pub mod analyze;
        }
    }
}
