pub mod annotation {
    pub mod domain {
        pub mod face_annotator;
    }
    pub mod infrastructure;
}

pub mod detection {
    pub mod domain {
        pub mod face_detector;
    }
    pub mod infrastructure;
}

pub mod imaging {
    pub mod domain {
        pub mod image_reader;
        pub mod image_writer;
    }
    pub mod infrastructure {
        pub mod image_file_reader;
        pub mod image_file_writer;
    }
}

pub mod pipeline {
    pub mod outline_faces_use_case;
}

pub mod shared {
    pub mod canvas;
    pub mod constants;
    pub mod face_annotation;
    pub mod point;
    pub mod settings;
}
