// <auto-generated>
//     Generated by protoc-gen-omgpp 0.1.0 from protos/greeter.proto. Do not edit.
// </auto-generated>

pub mod demo {
    /// Wire type tag of `Demo.HelloRequest`.
    impl ::omgpp_gen::runtime::OmgppMessage for crate::demo::HelloRequest {
        const MESSAGE_ID: i64 = 14224;
    }
    /// Wire type tag of `Demo.HelloReply`.
    impl ::omgpp_gen::runtime::OmgppMessage for crate::demo::HelloReply {
        const MESSAGE_ID: i64 = 10794;
    }
}
