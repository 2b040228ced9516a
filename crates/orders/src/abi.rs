use alloy::sol;

sol! {
    interface IComposableCow {
        function singleOrders(address owner, bytes32 hash) external view returns (bool);
        function remove(bytes32 singleOrderHash) external;
    }

    interface IMulticall3 {
        struct Call3 {
            address target;
            bool allowFailure;
            bytes callData;
        }

        struct Call3Result {
            bool success;
            bytes returnData;
        }

        function aggregate3(Call3[] calldata calls) external payable returns (Call3Result[] memory returnData);
    }
}
