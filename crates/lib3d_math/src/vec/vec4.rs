use static_assertions as sa;

generic_vec!{ doc = "4D vector, reserved for homogeneous coordinates (no algebra defined)"; Vector4, 4, x => 0, y => 1, z => 2, w => 3 }

sa::assert_eq_size!(Vector4, [f64; 4]);

#[cfg(test)]
mod tests {
    use crate::Vector4;

    #[test]
    fn test_create_convert() {
        let vec = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(vec.w, 4.0);
        assert_eq!(vec[3], 4.0);
        assert_eq!(vec.to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Vector4::from([1.0, 2.0, 3.0, 4.0]), vec);
        assert_eq!(Vector4::default(), Vector4::set(0.0));
        assert_eq!(vec.to_string(), "(1, 2, 3, 4)");
    }
}
