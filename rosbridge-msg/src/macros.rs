/// Wire a typed service value to the untyped wrapper it holds in `inner`.
///
/// Implements `JsonWrapper` with text-based equality, a read-only view of
/// the untyped wrapper, and conversion into it. The payload stays fixed;
/// only metadata gets setters, see `impl_service_request!` and
/// `impl_service_response!`.
macro_rules! impl_service_value {
    ($ty: ty, $base: ty) => {
        ::rosbridge_types::impl_json_wrapper!($ty, inner);

        impl ::std::convert::AsRef<$base> for $ty {
            fn as_ref(&self) -> &$base {
                &self.inner
            }
        }

        impl ::std::convert::From<$ty> for $base {
            fn from(value: $ty) -> Self {
                value.inner
            }
        }
    };
}

/// Typed service request: `impl_service_value!` plus the correlation id.
macro_rules! impl_service_request {
    ($ty: ty) => {
        impl_service_value!($ty, ::rosbridge_types::ServiceRequest);

        impl $ty {
            /// The id correlating this request with its response.
            pub fn id(&self) -> &str {
                self.inner.id()
            }

            /// Set the correlation id.
            pub fn set_id(&mut self, id: impl Into<String>) {
                self.inner.set_id(id);
            }
        }
    };
}

/// Typed service response: `impl_service_value!` plus the result flag and
/// response type.
macro_rules! impl_service_response {
    ($ty: ty) => {
        impl_service_value!($ty, ::rosbridge_types::ServiceResponse);

        impl $ty {
            /// Whether the service server reported success.
            pub fn result(&self) -> bool {
                self.inner.result()
            }

            /// Set the result flag.
            pub fn set_result(&mut self, result: bool) {
                self.inner.set_result(result);
            }

            /// Set the type of the service response.
            pub fn set_service_response_type(&mut self, service_response_type: impl Into<String>) {
                self.inner.set_service_response_type(service_response_type);
            }
        }
    };
}
